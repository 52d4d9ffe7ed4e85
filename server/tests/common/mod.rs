//! Shared helpers for the gateway integration tests

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
	Router,
	body::Body,
	http::{Request, header},
	response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;

use tenantdesk::AppBuilder;
use tenantdesk_core::auth::generate_token;
use tenantdesk_settings::TenantSettingsProvider;

pub const SECRET: &str = "integration-secret";
pub const CENTRAL_HOST: &str = "admin.example.com";
pub const TENANT_HOST: &str = "acme.example.com";
pub const INDEX_HTML: &str = "<!doctype html><title>console</title>";

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub struct TestApp {
	pub router: Router,
	// Keeps the console build alive for the duration of the test
	_dist: TempDir,
}

fn dist_dir() -> TempDir {
	let dist = TempDir::new().unwrap();
	std::fs::write(dist.path().join("index.html"), INDEX_HTML).unwrap();
	std::fs::create_dir(dist.path().join("assets")).unwrap();
	std::fs::write(dist.path().join("assets").join("app.js"), "console.log('ok')").unwrap();
	dist
}

pub fn test_app() -> TestApp {
	test_app_with(|_| {})
}

pub fn test_app_with_provider(provider: Arc<dyn TenantSettingsProvider>) -> TestApp {
	test_app_with(move |builder| {
		builder.tenant_settings(provider);
	})
}

pub fn test_app_with(configure: impl FnOnce(&mut AppBuilder)) -> TestApp {
	setup_test_logging();
	let dist = dist_dir();

	let mut builder = AppBuilder::new();
	builder.jwt_secret(SECRET).main_domains([CENTRAL_HOST]).dist_dir(dist.path());
	configure(&mut builder);

	let app = builder.build().unwrap();
	TestApp { router: tenantdesk::routes::init(app), _dist: dist }
}

pub fn token(sub: &str) -> String {
	generate_token(SECRET.as_bytes(), sub, None, Duration::from_secs(300)).unwrap().into()
}

pub fn request(host: &str, path: &str) -> axum::http::request::Builder {
	Request::builder().uri(path).header(header::HOST, host)
}

pub fn get(host: &str, path: &str) -> Request<Body> {
	request(host, path).body(Body::empty()).unwrap()
}

pub fn get_signed_in(host: &str, path: &str) -> Request<Body> {
	request(host, path)
		.header(header::COOKIE, format!("accessToken={}", token("operator")))
		.body(Body::empty())
		.unwrap()
}

pub async fn body_string(res: Response) -> String {
	let bytes = res.into_body().collect().await.unwrap().to_bytes();
	String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(res: Response) -> Value {
	serde_json::from_str(&body_string(res).await).unwrap()
}

// vim: ts=4
