//! App state type

use std::{path::Path, sync::Arc};

use tenantdesk_settings::{
	AdvancedSettingsDocument, MergePolicy, PartialSettings, SettingsDocument, SettingsStore,
	TenantSettingsProvider,
};

use crate::access::AccessRouter;
use crate::auth::TokenVerifier;
use crate::domain::MainDomains;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub main_domains: MainDomains,
	pub router: AccessRouter,
	pub tokens: Arc<dyn TokenVerifier>,

	// Settings subsystem
	pub settings_defaults: SettingsDocument,
	pub advanced_defaults: AdvancedSettingsDocument,
	pub tenant_settings: Arc<dyn TenantSettingsProvider>,
	pub merge_policy: MergePolicy,
}

impl AppState {
	/// Settings store for one request, layered in lifecycle order: static
	/// defaults, the stored preference, then the tenant defaults
	pub async fn settings_store(&self, host: &str, stored: Option<&PartialSettings>) -> SettingsStore {
		let tenant = self.tenant_settings.settings(host).await;
		let store = SettingsStore::new(self.settings_defaults.clone(), self.merge_policy);
		// Intermediate documents are read back through the store
		store.load(stored);
		store.apply_server_defaults(tenant.as_ref());
		store
	}

	/// Advanced policy flags for the tenant behind `host`
	pub async fn resolve_advanced(&self, host: &str) -> AdvancedSettingsDocument {
		let partial = self.tenant_settings.advanced(host).await;
		self.advanced_defaults.merge_with(partial.as_ref(), self.merge_policy)
	}
}

impl std::fmt::Debug for AppState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppState")
			.field("opts", &self.opts)
			.field("main_domains", &self.main_domains)
			.field("merge_policy", &self.merge_policy)
			.finish_non_exhaustive()
	}
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Built console UI, served for every non-API path
	pub dist_dir: Box<Path>,
	pub token_cookie: Box<str>,
	pub settings_cookie: Box<str>,
	/// Disable HTTP caching of the UI (for development)
	pub disable_cache: bool,
}


// vim: ts=4
