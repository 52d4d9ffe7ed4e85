pub use crate::app::App;
pub use tenantdesk_types::prelude::*;

// vim: ts=4
