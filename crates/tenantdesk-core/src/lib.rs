//! Core of the Tenantdesk console gateway.
//!
//! Host classification, the page access router, session token verification
//! and the axum middlewares that tie them to a request. The server crate
//! assembles these into a running application.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod app;
pub mod auth;
pub mod domain;
pub mod extract;
pub mod middleware;
pub mod nav;
pub mod prelude;

// Re-export commonly used types
pub use access::{AccessRequest, AccessRouter, RouteTable};
pub use app::{App, AppBuilderOpts, AppState};
pub use auth::{JwtVerifier, SessionClaims, TokenVerifier};
pub use domain::MainDomains;
pub use extract::{Auth, OptionalAuth};
pub use nav::NavStack;

// vim: ts=4
