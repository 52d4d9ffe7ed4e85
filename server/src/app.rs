//! App builder - constructs and runs the Tenantdesk gateway

use std::{path::PathBuf, sync::Arc, time::Duration};

use tenantdesk_core::access::{AccessRouter, RouteTable};
use tenantdesk_core::app::VERSION;
use tenantdesk_core::auth::{JwtVerifier, TOKEN_COOKIE, TokenVerifier};
use tenantdesk_core::domain::MainDomains;
use tenantdesk_settings::cookie::SETTINGS_COOKIE;
use tenantdesk_settings::{
	AdvancedSettingsDocument, HttpTenantSettings, MergePolicy, SettingsDocument,
	StaticTenantSettings, TenantSettingsProvider,
};

pub use tenantdesk_core::app::{App, AppBuilderOpts, AppState};

use crate::prelude::*;
use crate::routes;

const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(3);

pub struct AppBuilder {
	opts: AppBuilderOpts,
	main_domains: MainDomains,
	route_table: RouteTable,
	jwt_secret: Option<Box<[u8]>>,
	token_verifier: Option<Arc<dyn TokenVerifier>>,
	settings_defaults: SettingsDocument,
	advanced_defaults: AdvancedSettingsDocument,
	tenant_settings: Option<Arc<dyn TenantSettingsProvider>>,
	merge_policy: MergePolicy,
}

impl AppBuilder {
	pub fn new() -> Self {
		// Ignored when a subscriber is already installed (tests, embedding)
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				dist_dir: PathBuf::from("./dist").into(),
				token_cookie: TOKEN_COOKIE.into(),
				settings_cookie: SETTINGS_COOKIE.into(),
				disable_cache: false,
			},
			main_domains: MainDomains::default(),
			route_table: RouteTable::default(),
			jwt_secret: None,
			token_verifier: None,
			settings_defaults: SettingsDocument::default(),
			advanced_defaults: AdvancedSettingsDocument::default(),
			tenant_settings: None,
			merge_policy: MergePolicy::default(),
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.dist_dir = dist_dir.into();
		self
	}
	pub fn token_cookie(&mut self, name: impl Into<Box<str>>) -> &mut Self {
		self.opts.token_cookie = name.into();
		self
	}
	pub fn settings_cookie(&mut self, name: impl Into<Box<str>>) -> &mut Self {
		self.opts.settings_cookie = name.into();
		self
	}
	pub fn disable_cache(&mut self, disable: bool) -> &mut Self {
		self.opts.disable_cache = disable;
		self
	}

	// Routing
	pub fn main_domains(
		&mut self,
		main_domains: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> &mut Self {
		self.main_domains = MainDomains::new(main_domains);
		self
	}
	pub fn route_table(&mut self, route_table: RouteTable) -> &mut Self {
		self.route_table = route_table;
		self
	}

	// Sessions
	pub fn jwt_secret(&mut self, secret: impl AsRef<[u8]>) -> &mut Self {
		self.jwt_secret = Some(secret.as_ref().into());
		self
	}
	pub fn token_verifier(&mut self, verifier: Arc<dyn TokenVerifier>) -> &mut Self {
		self.token_verifier = Some(verifier);
		self
	}

	// Settings
	pub fn settings_defaults(&mut self, defaults: SettingsDocument) -> &mut Self {
		self.settings_defaults = defaults;
		self
	}
	pub fn advanced_defaults(&mut self, defaults: AdvancedSettingsDocument) -> &mut Self {
		self.advanced_defaults = defaults;
		self
	}
	pub fn tenant_settings(&mut self, provider: Arc<dyn TenantSettingsProvider>) -> &mut Self {
		self.tenant_settings = Some(provider);
		self
	}
	/// Fetch tenant overlays from the tenant backend at `base_url`
	pub fn tenant_settings_url(&mut self, base_url: impl Into<Box<str>>) -> &mut Self {
		self.tenant_settings = Some(HttpTenantSettings::new_arc(base_url, DEFAULT_BACKEND_TIMEOUT));
		self
	}
	pub fn merge_policy(&mut self, policy: MergePolicy) -> &mut Self {
		self.merge_policy = policy;
		self
	}

	/// Assemble the application state without binding a listener
	pub fn build(self) -> ClResult<App> {
		let tokens: Arc<dyn TokenVerifier> = match (self.token_verifier, self.jwt_secret) {
			(Some(verifier), _) => verifier,
			(None, Some(secret)) if !secret.is_empty() => Arc::new(JwtVerifier::hs256(&secret)),
			_ => {
				error!("FATAL: No JWT secret or token verifier configured");
				return Err(Error::ConfigError("No JWT secret or token verifier configured".into()));
			}
		};

		if self.main_domains.is_empty() {
			warn!("No main domains configured, every host is served as a tenant console");
		} else {
			info!(
				"Central console domains: {}",
				self.main_domains.iter().collect::<Vec<_>>().join(", ")
			);
		}

		let tenant_settings = self.tenant_settings.unwrap_or_else(|| {
			info!("No tenant settings backend configured, using static defaults");
			Arc::new(StaticTenantSettings::default())
		});

		Ok(Arc::new(AppState {
			opts: self.opts,
			main_domains: self.main_domains,
			router: AccessRouter::new(self.route_table),
			tokens,
			settings_defaults: self.settings_defaults,
			advanced_defaults: self.advanced_defaults,
			tenant_settings,
			merge_policy: self.merge_policy,
		}))
	}

	pub async fn run(self) -> ClResult<()> {
		info!(" _____                      _      _           _    ");
		info!("|_   _|__ _ __   __ _ _ __ | |_ __| | ___  ___| | __");
		info!("  | |/ _ \\ '_ \\ / _` | '_ \\| __/ _` |/ _ \\/ __| |/ /");
		info!("  | |  __/ | | | (_| | | | | || (_| |  __/\\__ \\   < ");
		info!("  |_|\\___|_| |_|\\__,_|_| |_|\\__\\__,_|\\___||___/_|\\_\\");
		info!("V{}", VERSION);
		info!("");

		let app = self.build()?;
		if !app.opts.dist_dir.is_dir() {
			warn!("Console dist dir {} does not exist", app.opts.dist_dir.display());
		}
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			e
		})?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
		info!("Shut down");

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Cannot listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}


// vim: ts=4
