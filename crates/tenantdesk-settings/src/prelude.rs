pub use tenantdesk_types::prelude::*;

// vim: ts=4
