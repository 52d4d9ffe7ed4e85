//! Common types used throughout the console gateway.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

// DomainClassification //
//**********************//
/// Result of classifying a request host against the configured main domains.
///
/// Computed once per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainClassification {
	pub host: Box<str>,
	pub is_central: bool,
}

impl DomainClassification {
	pub fn central(host: impl Into<Box<str>>) -> Self {
		DomainClassification { host: host.into(), is_central: true }
	}

	pub fn tenant(host: impl Into<Box<str>>) -> Self {
		DomainClassification { host: host.into(), is_central: false }
	}

	pub fn mode(&self) -> &'static str {
		if self.is_central { "central" } else { "tenant" }
	}
}

// AccessDecision //
//****************//
/// Outcome of routing a page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
	Allow,
	RedirectTo(Box<str>),
	Deny(StatusCode),
}

impl AccessDecision {
	pub fn redirect(path: impl Into<Box<str>>) -> Self {
		AccessDecision::RedirectTo(path.into())
	}

	pub fn not_found() -> Self {
		AccessDecision::Deny(StatusCode::NOT_FOUND)
	}

	pub fn forbidden() -> Self {
		AccessDecision::Deny(StatusCode::FORBIDDEN)
	}
}

impl std::fmt::Display for AccessDecision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AccessDecision::Allow => write!(f, "allow"),
			AccessDecision::RedirectTo(path) => write!(f, "redirect:{}", path),
			AccessDecision::Deny(status) => write!(f, "deny:{}", status.as_u16()),
		}
	}
}

// ApiResponse //
//*************//
/// JSON envelope for API responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
	pub data: T,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub req_id: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data, req_id: None }
	}

	pub fn with_req_id(mut self, req_id: impl Into<String>) -> Self {
		let req_id = req_id.into();
		if !req_id.is_empty() {
			self.req_id = Some(req_id);
		}
		self
	}
}


// vim: ts=4
