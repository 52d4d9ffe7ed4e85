//! Central vs tenant host classification
//!
//! A request is in central (platform operator) mode iff its host is exactly
//! one of the configured main domains. Everything else is a tenant host.

use axum::http::{Request, header};

use tenantdesk_types::types::DomainClassification;
use tenantdesk_types::utils::parse_list;

/// Configured set of central console hostnames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainDomains(Box<[Box<str>]>);

impl MainDomains {
	pub fn new(domains: impl IntoIterator<Item = impl Into<Box<str>>>) -> Self {
		MainDomains(domains.into_iter().map(Into::into).filter(|d: &Box<str>| !d.is_empty()).collect())
	}

	/// Parse a comma-separated list such as the `MAIN_DOMAINS` variable
	pub fn parse(value: &str) -> Self {
		MainDomains(parse_list(value))
	}

	/// Exact, case-sensitive membership. The port is part of the host.
	pub fn contains(&self, host: &str) -> bool {
		!host.is_empty() && self.0.iter().any(|d| d.as_ref() == host)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(AsRef::as_ref)
	}
}

pub fn classify(host: &str, main_domains: &MainDomains) -> bool {
	main_domains.contains(host)
}

pub fn classify_host(host: &str, main_domains: &MainDomains) -> DomainClassification {
	if classify(host, main_domains) {
		DomainClassification::central(host)
	} else {
		DomainClassification::tenant(host)
	}
}

/// Host of a request: URI authority first, then the `Host` header
pub fn request_host<B>(req: &Request<B>) -> &str {
	req.uri()
		.authority()
		.map(|a| a.as_str())
		.or_else(|| req.headers().get(header::HOST).and_then(|h| h.to_str().ok()))
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;

	fn domains() -> MainDomains {
		MainDomains::parse("admin.example.com, ops.example.com:8443")
	}

	#[test]
	fn test_exact_match_is_central() {
		assert!(classify("admin.example.com", &domains()));
		assert!(classify("ops.example.com:8443", &domains()));
	}

	#[test]
	fn test_non_members_are_tenant() {
		for host in [
			"acme.example.com",
			"admin.example.com:443",
			"ADMIN.example.com",
			"sub.admin.example.com",
			"example.com",
			"ops.example.com",
		] {
			assert!(!classify(host, &domains()), "{} should be a tenant host", host);
		}
	}

	#[test]
	fn test_empty_inputs_default_to_tenant() {
		assert!(!classify("", &domains()));
		assert!(!classify("admin.example.com", &MainDomains::default()));
		assert!(!classify("admin.example.com", &MainDomains::parse("")));
		assert!(!classify("", &MainDomains::parse(",")));
	}

	#[test]
	fn test_new_drops_empty_entries() {
		let domains = MainDomains::new(["", "admin.example.com"]);
		assert_eq!(domains.len(), 1);
		assert_eq!(domains.iter().collect::<Vec<_>>(), vec!["admin.example.com"]);
	}

	#[test]
	fn test_request_host_prefers_authority() {
		let req = Request::builder()
			.uri("http://admin.example.com:8080/dashboard")
			.header(header::HOST, "other.example.com")
			.body(Body::empty())
			.unwrap();
		assert_eq!(request_host(&req), "admin.example.com:8080");

		let req = Request::builder()
			.uri("/dashboard")
			.header(header::HOST, "acme.example.com")
			.body(Body::empty())
			.unwrap();
		assert_eq!(request_host(&req), "acme.example.com");

		let req = Request::builder().uri("/dashboard").body(Body::empty()).unwrap();
		assert_eq!(request_host(&req), "");
	}

	#[test]
	fn test_classify_host() {
		let c = classify_host("admin.example.com", &domains());
		assert!(c.is_central);
		assert_eq!(&*c.host, "admin.example.com");
		assert_eq!(classify_host("acme.example.com", &domains()).mode(), "tenant");
	}
}

// vim: ts=4
