//! Tenantdesk is the gateway in front of a multi-tenant admin console.
//!
//! # Features
//!
//! - Host-aware routing
//!		- main domains serve the platform operator's central console
//!		- every other host is a tenant console
//! - Access gate for console pages
//!		- redirects to the right login page when there is no session
//!		- hides the other mode's pages (404) and denies foreign pages (403)
//! - Settings service
//!		- UI settings merged over defaults, persisted in a cookie
//!		- per-tenant advanced policy flags from the tenant backend

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod handler;
pub mod prelude;
pub mod routes;

pub use crate::app::AppBuilder;
pub use tenantdesk_core::{App, AppBuilderOpts, AppState};

// vim: ts=4
