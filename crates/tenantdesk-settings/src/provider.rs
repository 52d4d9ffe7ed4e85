//! Tenant settings providers
//!
//! The tenant backend owns per-tenant defaults for the UI settings and the
//! advanced policy flags. A provider fetches them for a request host. Any
//! failure is logged and reported as "nothing to overlay", so callers always
//! end up with the static defaults at worst.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_util::{client::legacy::Client, rt::TokioExecutor};
use serde::de::DeserializeOwned;

use crate::advanced::PartialAdvancedSettings;
use crate::prelude::*;
use crate::types::PartialSettings;

pub const ADVANCED_SETTINGS_PATH: &str = "/settings/advanced";
pub const UI_SETTINGS_PATH: &str = "/settings/ui";

#[async_trait]
pub trait TenantSettingsProvider: Send + Sync {
	/// Advanced policy flags configured for the tenant behind `host`
	async fn advanced(&self, host: &str) -> Option<PartialAdvancedSettings>;

	/// Tenant defaults for the UI settings document
	async fn settings(&self, _host: &str) -> Option<PartialSettings> {
		None
	}
}

// StaticTenantSettings //
//**********************//
/// Fixed overlays shared by every tenant
#[derive(Debug, Clone, Default)]
pub struct StaticTenantSettings {
	pub advanced: Option<PartialAdvancedSettings>,
	pub settings: Option<PartialSettings>,
}

#[async_trait]
impl TenantSettingsProvider for StaticTenantSettings {
	async fn advanced(&self, _host: &str) -> Option<PartialAdvancedSettings> {
		self.advanced.clone()
	}

	async fn settings(&self, _host: &str) -> Option<PartialSettings> {
		self.settings.clone()
	}
}

// HttpTenantSettings //
//********************//
/// Fetches overlays from the tenant REST backend
///
/// The tenant is identified by forwarding the console host in
/// `X-Forwarded-Host`.
pub struct HttpTenantSettings {
	base_url: Box<str>,
	timeout: Duration,
}

impl HttpTenantSettings {
	pub fn new(base_url: impl Into<Box<str>>, timeout: Duration) -> Self {
		let base_url: Box<str> = base_url.into();
		let base_url = base_url.trim_end_matches('/').into();
		Self { base_url, timeout }
	}

	pub fn new_arc(base_url: impl Into<Box<str>>, timeout: Duration) -> Arc<dyn TenantSettingsProvider> {
		Arc::new(Self::new(base_url, timeout))
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	async fn fetch_json<T: DeserializeOwned>(&self, path: &str, host: &str) -> ClResult<T> {
		let url = self.url(path);
		let req = hyper::Request::builder()
			.method(hyper::Method::GET)
			.uri(&url)
			.header(hyper::header::ACCEPT, "application/json")
			.header("X-Forwarded-Host", host)
			.body(Empty::<Bytes>::new())
			.map_err(|e| Error::Internal(format!("failed to build request: {}", e)))?;

		let result = if url.starts_with("https://") {
			let https_connector = hyper_rustls::HttpsConnectorBuilder::new()
				.with_native_roots()
				.map_err(|_| Error::ConfigError("no native root CA certificates found".into()))?
				.https_only()
				.enable_http1()
				.build();
			let client: Client<_, Empty<Bytes>> =
				Client::builder(TokioExecutor::new()).build(https_connector);
			tokio::time::timeout(self.timeout, client.request(req)).await
		} else {
			let http_connector = hyper_util::client::legacy::connect::HttpConnector::new();
			let client: Client<_, Empty<Bytes>> =
				Client::builder(TokioExecutor::new()).build(http_connector);
			tokio::time::timeout(self.timeout, client.request(req)).await
		};

		let res = match result {
			Ok(Ok(res)) => res,
			Ok(Err(e)) => return Err(Error::NetworkError(e.to_string())),
			Err(_) => return Err(Error::Timeout),
		};

		let status = res.status();
		if status == hyper::StatusCode::NOT_FOUND {
			return Err(Error::NotFound);
		}
		if !status.is_success() {
			return Err(Error::NetworkError(format!("HTTP {}", status)));
		}

		let body = res
			.into_body()
			.collect()
			.await
			.map_err(|e| Error::NetworkError(e.to_string()))?
			.to_bytes();
		Ok(serde_json::from_slice(&body)?)
	}

	async fn fetch_overlay<T: DeserializeOwned>(&self, path: &str, host: &str) -> Option<T> {
		match self.fetch_json(path, host).await {
			Ok(value) => Some(value),
			Err(Error::NotFound) => {
				debug!(host = %host, path = %path, "No tenant settings overlay");
				None
			}
			Err(e) => {
				warn!(host = %host, path = %path, "Failed to fetch tenant settings: {}", e);
				None
			}
		}
	}
}

#[async_trait]
impl TenantSettingsProvider for HttpTenantSettings {
	async fn advanced(&self, host: &str) -> Option<PartialAdvancedSettings> {
		self.fetch_overlay(ADVANCED_SETTINGS_PATH, host).await
	}

	async fn settings(&self, host: &str) -> Option<PartialSettings> {
		self.fetch_overlay(UI_SETTINGS_PATH, host).await
	}
}


// vim: ts=4
