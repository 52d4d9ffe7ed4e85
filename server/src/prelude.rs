pub use tenantdesk_core::prelude::*;

// vim: ts=4
