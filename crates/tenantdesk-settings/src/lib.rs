//! Settings resolution for the Tenantdesk console.
//!
//! Every settings payload the console sees (cookie, backend response, local
//! cache) is partial. This crate merges such payloads over static defaults so
//! that the UI always reads a complete document:
//!
//! - [`types::SettingsDocument`]: UI presentation settings
//! - [`advanced::AdvancedSettingsDocument`]: tenant operator policy flags
//! - [`store::SettingsStore`]: the layered in-memory lifecycle
//! - [`cookie`]: the browser cookie codec
//! - [`provider`]: tenant overlays from the backend

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod advanced;
pub mod cookie;
pub mod merge;
pub mod provider;
pub mod store;
pub mod types;

mod prelude;

pub use advanced::{AdvancedSettingsDocument, PartialAdvancedSettings};
pub use merge::MergePolicy;
pub use provider::{HttpTenantSettings, StaticTenantSettings, TenantSettingsProvider};
pub use store::SettingsStore;
pub use types::{PartialSettings, SettingsDocument};

// vim: ts=4
