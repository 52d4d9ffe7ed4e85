//! Shared types and error handling for the Tenantdesk console gateway.
//!
//! Kept separate from the core crate so the settings crate and the server
//! can agree on errors and per-request types without depending on each other.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extract;
pub mod prelude;
pub mod types;
pub mod utils;

// vim: ts=4
