use std::{env, path::PathBuf};

use tenantdesk::AppBuilder;
use tenantdesk::prelude::*;
use tenantdesk_core::access::RouteTable;
use tenantdesk_types::utils::parse_list;

fn env_opt(name: &str) -> Option<String> {
	env::var(name).ok().filter(|v| !v.is_empty())
}

#[tokio::main]
async fn main() {
	let mut builder = AppBuilder::new();
	builder
		.main_domains(parse_list(&env::var("MAIN_DOMAINS").unwrap_or_default()))
		.dist_dir(PathBuf::from(env_opt("DIST_DIR").unwrap_or_else(|| "./dist".into())))
		.disable_cache(env_opt("DISABLE_CACHE").is_some_and(|v| v == "1" || v == "true"));

	if let Some(listen) = env_opt("LISTEN") {
		builder.listen(listen);
	}
	if let Some(secret) = env_opt("JWT_SECRET") {
		builder.jwt_secret(secret);
	}
	if let Some(name) = env_opt("TOKEN_COOKIE") {
		builder.token_cookie(name);
	}
	if let Some(name) = env_opt("SETTINGS_COOKIE") {
		builder.settings_cookie(name);
	}
	if let Some(url) = env_opt("TENANT_SETTINGS_URL") {
		builder.tenant_settings_url(url);
	}
	if let Some(policy) = env_opt("MERGE_POLICY") {
		match policy.parse() {
			Ok(policy) => {
				builder.merge_policy(policy);
			}
			Err(e) => {
				error!("FATAL: Invalid MERGE_POLICY: {}", e);
				std::process::exit(1);
			}
		}
	}
	if let Some(pages) = env_opt("CENTRAL_PAGES") {
		builder.route_table(RouteTable::default().central_pages(parse_list(&pages)));
	}

	if builder.run().await.is_err() {
		std::process::exit(1);
	}
}

// vim: ts=4
