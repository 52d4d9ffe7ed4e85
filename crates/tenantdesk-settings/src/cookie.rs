//! Settings cookie codec
//!
//! The browser keeps the user's settings in a cookie as percent-encoded JSON.
//! Decoding never fails: a missing or malformed cookie means "no stored
//! preference".

use hyper::HeaderMap;

use tenantdesk_types::utils::get_cookie;

use crate::prelude::*;
use crate::types::{PartialSettings, SettingsDocument};

pub const SETTINGS_COOKIE: &str = "settings";

/// One year
pub const COOKIE_MAX_AGE: u64 = 31_536_000;

pub fn decode(value: &str) -> Option<PartialSettings> {
	let json = urlencoding::decode(value)
		.inspect_err(|e| debug!("Settings cookie is not valid percent-encoding: {}", e))
		.ok()?;
	serde_json::from_str(&json)
		.inspect_err(|e| debug!("Settings cookie is not valid JSON: {}", e))
		.ok()
}

pub fn encode(doc: &SettingsDocument) -> ClResult<String> {
	let json = serde_json::to_string(doc)?;
	Ok(urlencoding::encode(&json).into_owned())
}

/// Read the stored settings from the request's cookies
pub fn from_headers(headers: &HeaderMap, name: &str) -> Option<PartialSettings> {
	get_cookie(headers, name).and_then(decode)
}

/// `Set-Cookie` value persisting `doc`
pub fn set_cookie(name: &str, doc: &SettingsDocument) -> ClResult<String> {
	Ok(format!("{}={}; Path=/; Max-Age={}; SameSite=Lax", name, encode(doc)?, COOKIE_MAX_AGE))
}

/// `Set-Cookie` value removing the stored settings
pub fn clear_cookie(name: &str) -> String {
	format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
}


// vim: ts=4
