//! Utility functions

use axum::http::{HeaderMap, header};

/// Find a cookie by name across all `Cookie` headers of a request
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers
		.get_all(header::COOKIE)
		.iter()
		.filter_map(|h| h.to_str().ok())
		.flat_map(|h| h.split(';'))
		.filter_map(|pair| pair.trim().split_once('='))
		.find(|(key, _)| key.trim() == name)
		.map(|(_, value)| value.trim().trim_matches('"'))
}

/// Read a bearer token from the `Authorization` header
pub fn get_bearer(headers: &HeaderMap) -> Option<&str> {
	let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
	let token = auth_header.strip_prefix("Bearer ")?.trim();
	if token.is_empty() { None } else { Some(token) }
}

/// Parse a comma-separated list, trimming entries and dropping empty ones
pub fn parse_list(value: &str) -> Box<[Box<str>]> {
	value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(Box::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::HeaderValue;

	#[test]
	fn test_get_cookie() {
		let mut headers = HeaderMap::new();
		headers.append(header::COOKIE, HeaderValue::from_static("a=1; accessToken=abc.def"));
		headers.append(header::COOKIE, HeaderValue::from_static("settings=%7B%7D"));

		assert_eq!(get_cookie(&headers, "a"), Some("1"));
		assert_eq!(get_cookie(&headers, "accessToken"), Some("abc.def"));
		assert_eq!(get_cookie(&headers, "settings"), Some("%7B%7D"));
		assert_eq!(get_cookie(&headers, "missing"), None);
	}

	#[test]
	fn test_get_cookie_does_not_match_prefix() {
		let mut headers = HeaderMap::new();
		headers.insert(header::COOKIE, HeaderValue::from_static("accessTokenOld=x"));
		assert_eq!(get_cookie(&headers, "accessToken"), None);
	}

	#[test]
	fn test_get_bearer() {
		let mut headers = HeaderMap::new();
		assert_eq!(get_bearer(&headers), None);
		headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer  tok "));
		assert_eq!(get_bearer(&headers), Some("tok"));
		headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
		assert_eq!(get_bearer(&headers), None);
		headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
		assert_eq!(get_bearer(&headers), None);
	}

	#[test]
	fn test_parse_list() {
		let list = parse_list(" admin.example.com, ,ops.example.com:8443,");
		assert_eq!(list.len(), 2);
		assert_eq!(&*list[0], "admin.example.com");
		assert_eq!(&*list[1], "ops.example.com:8443");
		assert!(parse_list("").is_empty());
	}
}

// vim: ts=4
