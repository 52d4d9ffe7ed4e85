//! Page access routing
//!
//! Decides, for a page request, whether to serve it, redirect it or deny it.
//! The decision depends only on the path, the host classification and whether
//! the request carries a valid session token. The path allow-lists live in a
//! [`RouteTable`] injected at construction.

use tenantdesk_types::types::AccessDecision;

pub const CENTRAL_LOGIN_PATH: &str = "/auth/login";
pub const TENANT_LOGIN_PATH: &str = "/login";
pub const CENTRAL_HOME_PATH: &str = "/dashboard";
pub const TENANT_HOME_PATH: &str = "/home";

pub fn login_path(is_central: bool) -> &'static str {
	if is_central { CENTRAL_LOGIN_PATH } else { TENANT_LOGIN_PATH }
}

pub fn home_path(is_central: bool) -> &'static str {
	if is_central { CENTRAL_HOME_PATH } else { TENANT_HOME_PATH }
}

/// True if `path` is `entry` or lies below it
fn matches_entry(entry: &str, path: &str) -> bool {
	match path.strip_prefix(entry) {
		Some("") => true,
		Some(rest) => rest.starts_with('/') || entry.ends_with('/'),
		None => false,
	}
}

/// Allow-list from `paths`. Empty entries are dropped.
fn to_list(paths: impl IntoIterator<Item = impl Into<Box<str>>>) -> Box<[Box<str>]> {
	paths.into_iter().map(Into::into).filter(|p: &Box<str>| !p.is_empty()).collect()
}

// RouteTable //
//************//
/// Ordered path allow-lists consulted by the [`AccessRouter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
	/// Reachable from any host, signed in or not (error pages, shared auth flows)
	pub shared_pages: Box<[Box<str>]>,
	/// Reachable without a session on tenant hosts
	pub public_tenant_pages: Box<[Box<str>]>,
	/// The only pages of the central console
	pub central_pages: Box<[Box<str>]>,
	/// Never routed at all (API, static assets)
	pub bypass_prefixes: Box<[Box<str>]>,
}

impl Default for RouteTable {
	fn default() -> Self {
		RouteTable {
			shared_pages: to_list([
				"/401",
				"/403",
				"/404",
				"/500",
				"/auth/verify-email",
				"/auth/accept-invite",
			]),
			public_tenant_pages: to_list(["/forgot-password", "/reset-password", "/register"]),
			central_pages: to_list([
				"/dashboard",
				"/tenant-management",
				"/domain-management",
				"/localization",
				"/central-settings",
				CENTRAL_LOGIN_PATH,
			]),
			bypass_prefixes: to_list(["/api", "/assets", "/favicon.ico"]),
		}
	}
}

impl RouteTable {
	pub fn shared_pages(mut self, paths: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
		self.shared_pages = to_list(paths);
		self
	}

	pub fn public_tenant_pages(
		mut self,
		paths: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> Self {
		self.public_tenant_pages = to_list(paths);
		self
	}

	pub fn central_pages(mut self, paths: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
		self.central_pages = to_list(paths);
		self
	}

	pub fn bypass_prefixes(mut self, paths: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
		self.bypass_prefixes = to_list(paths);
		self
	}

	pub fn is_shared(&self, path: &str) -> bool {
		self.shared_pages.iter().any(|e| matches_entry(e, path))
	}

	pub fn is_public_tenant(&self, path: &str) -> bool {
		self.public_tenant_pages.iter().any(|e| matches_entry(e, path))
	}

	pub fn is_central_page(&self, path: &str) -> bool {
		self.central_pages.iter().any(|e| matches_entry(e, path))
	}

	pub fn is_bypassed(&self, path: &str) -> bool {
		self.bypass_prefixes.iter().any(|e| matches_entry(e, path))
	}
}

// AccessRouter //
//**************//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest<'a> {
	pub path: &'a str,
	pub is_central: bool,
	/// A missing, malformed or expired token all count as unauthenticated
	pub authenticated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AccessRouter {
	table: RouteTable,
}

impl AccessRouter {
	pub fn new(table: RouteTable) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Route a page request. Rules are evaluated in order, the first match wins.
	pub fn route(&self, req: &AccessRequest<'_>) -> AccessDecision {
		let AccessRequest { path, is_central, authenticated } = *req;

		if self.table.is_shared(path) {
			return AccessDecision::Allow;
		}

		if path == "/" {
			return AccessDecision::redirect(home_path(is_central));
		}

		// Each mode has its own login and home page, the other mode's are 404
		let foreign_page = if is_central {
			path == TENANT_LOGIN_PATH || path == TENANT_HOME_PATH
		} else {
			path == CENTRAL_LOGIN_PATH || path == CENTRAL_HOME_PATH
		};
		if foreign_page {
			return AccessDecision::not_found();
		}

		if !is_central && self.table.is_public_tenant(path) {
			return AccessDecision::Allow;
		}

		if !authenticated {
			let login = login_path(is_central);
			return if path.starts_with(login) {
				AccessDecision::Allow
			} else {
				AccessDecision::redirect(login)
			};
		}

		// Central hosts serve only central pages, tenant hosts never do
		if is_central != self.table.is_central_page(path) {
			return AccessDecision::forbidden();
		}

		AccessDecision::Allow
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::StatusCode;

	fn route(path: &str, is_central: bool, authenticated: bool) -> AccessDecision {
		AccessRouter::default().route(&AccessRequest { path, is_central, authenticated })
	}

	#[test]
	fn test_shared_pages_always_allowed() {
		let table = RouteTable::default();
		for path in table.shared_pages.iter() {
			for is_central in [true, false] {
				for authenticated in [true, false] {
					assert_eq!(route(path, is_central, authenticated), AccessDecision::Allow, "{}", path);
				}
			}
		}
	}

	#[test]
	fn test_root_redirects_home() {
		for authenticated in [true, false] {
			assert_eq!(route("/", true, authenticated), AccessDecision::redirect("/dashboard"));
			assert_eq!(route("/", false, authenticated), AccessDecision::redirect("/home"));
		}
	}

	#[test]
	fn test_foreign_login_and_home_are_not_found() {
		for authenticated in [true, false] {
			assert_eq!(route("/login", true, authenticated), AccessDecision::not_found());
			assert_eq!(route("/home", true, authenticated), AccessDecision::not_found());
			assert_eq!(route("/auth/login", false, authenticated), AccessDecision::not_found());
			assert_eq!(route("/dashboard", false, authenticated), AccessDecision::not_found());
		}
	}

	#[test]
	fn test_public_tenant_pages() {
		assert_eq!(route("/forgot-password", false, false), AccessDecision::Allow);
		assert_eq!(route("/reset-password/abc123", false, false), AccessDecision::Allow);
		assert_eq!(route("/register", false, true), AccessDecision::Allow);
		// not public on the central console
		assert_eq!(route("/register", true, false), AccessDecision::redirect("/auth/login"));
	}

	#[test]
	fn test_unauthenticated_redirects_to_login() {
		assert_eq!(route("/manage/groups", false, false), AccessDecision::redirect("/login"));
		assert_eq!(route("/tenant-management", true, false), AccessDecision::redirect("/auth/login"));
	}

	#[test]
	fn test_login_page_does_not_loop() {
		assert_eq!(route("/login", false, false), AccessDecision::Allow);
		assert_eq!(route("/login/sso", false, false), AccessDecision::Allow);
		assert_eq!(route("/auth/login", true, false), AccessDecision::Allow);
	}

	#[test]
	fn test_central_pages_forbidden_on_tenant_hosts() {
		let table = RouteTable::default();
		for path in table.central_pages.iter() {
			let decision = route(path, false, true);
			// "/dashboard" and "/auth/login" are caught earlier by the 404 rules
			if &**path == "/dashboard" || &**path == "/auth/login" {
				assert_eq!(decision, AccessDecision::not_found());
			} else {
				assert_eq!(decision, AccessDecision::Deny(StatusCode::FORBIDDEN), "{}", path);
			}
		}
		assert_eq!(route("/tenant-management/t-42", false, true), AccessDecision::forbidden());
	}

	#[test]
	fn test_central_console_only_serves_central_pages() {
		assert_eq!(route("/tenant-management", true, true), AccessDecision::Allow);
		assert_eq!(route("/localization/de", true, true), AccessDecision::Allow);
		assert_eq!(route("/manage/groups", true, true), AccessDecision::forbidden());
	}

	#[test]
	fn test_unauthenticated_redirect_wins_over_mode_mismatch() {
		assert_eq!(route("/tenant-management", false, false), AccessDecision::redirect("/login"));
		assert_eq!(route("/manage/users", true, false), AccessDecision::redirect("/auth/login"));
	}

	#[test]
	fn test_tenant_pages_allowed_when_signed_in() {
		assert_eq!(route("/home", false, true), AccessDecision::Allow);
		assert_eq!(route("/manage/groups", false, true), AccessDecision::Allow);
	}

	#[test]
	fn test_entry_matching_is_segment_aware() {
		let table = RouteTable::default();
		assert!(table.is_central_page("/dashboard"));
		assert!(table.is_central_page("/dashboard/stats"));
		assert!(!table.is_central_page("/dashboards"));
		assert!(table.is_bypassed("/api/settings"));
		assert!(!table.is_bypassed("/apis"));
	}

	#[test]
	fn test_empty_entries_are_dropped() {
		let table = RouteTable::default().central_pages(["", "/operators"]).shared_pages([""]);
		assert_eq!(table.central_pages.len(), 1);
		assert!(table.shared_pages.is_empty());
		assert!(!table.is_central_page("/manage/groups"));
		assert!(!table.is_shared("/anything"));

		let router = AccessRouter::new(table);
		let req = AccessRequest { path: "/manage/groups", is_central: true, authenticated: true };
		assert_eq!(router.route(&req), AccessDecision::forbidden());
	}

	#[test]
	fn test_custom_route_table() {
		let router = AccessRouter::new(
			RouteTable::default().central_pages(["/operators"]).shared_pages(["/maintenance"]),
		);
		let req = |path, is_central, authenticated| AccessRequest { path, is_central, authenticated };
		assert_eq!(router.route(&req("/operators", true, true)), AccessDecision::Allow);
		assert_eq!(router.route(&req("/tenant-management", true, true)), AccessDecision::forbidden());
		assert_eq!(router.route(&req("/maintenance", false, false)), AccessDecision::Allow);
		assert_eq!(router.route(&req("/404", false, false)), AccessDecision::redirect("/login"));
	}

	#[test]
	fn test_scenarios() {
		let domains = crate::domain::MainDomains::parse("admin.example.com");
		let router = AccessRouter::default();

		let is_central = crate::domain::classify("admin.example.com", &domains);
		let req = AccessRequest { path: "/tenant-management", is_central, authenticated: true };
		assert_eq!(router.route(&req), AccessDecision::Allow);
		let req = AccessRequest { path: "/home", is_central, authenticated: true };
		assert_eq!(router.route(&req), AccessDecision::not_found());

		let is_central = crate::domain::classify("acme.example.com", &domains);
		let req = AccessRequest { path: "/manage/groups", is_central, authenticated: false };
		assert_eq!(router.route(&req), AccessDecision::redirect("/login"));
	}
}

// vim: ts=4
