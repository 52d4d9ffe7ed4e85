//! Session token verification
//!
//! Tokens are issued by the external authentication service. The gateway
//! only checks that a token is present and valid; why a token is rejected
//! does not matter to routing.

use axum::http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time;

use tenantdesk_types::utils::{get_bearer, get_cookie};

use crate::prelude::*;

pub const TOKEN_COOKIE: &str = "accessToken";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionClaims {
	pub sub: Box<str>,
	pub exp: u64,
	/// Comma-separated roles
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub r: Option<Box<str>>,
}

impl SessionClaims {
	pub fn roles(&self) -> impl Iterator<Item = &str> {
		self.r.as_deref().unwrap_or_default().split(',').map(str::trim).filter(|r| !r.is_empty())
	}
}

pub trait TokenVerifier: Send + Sync {
	fn verify(&self, token: &str) -> ClResult<SessionClaims>;
}

// JwtVerifier //
//*************//
/// HS256 verifier for tokens signed with a shared secret
pub struct JwtVerifier {
	key: DecodingKey,
	validation: Validation,
}

impl JwtVerifier {
	pub fn hs256(secret: &[u8]) -> Self {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.leeway = 0;
		// The audience of auth service tokens is not checked
		validation.validate_aud = false;
		Self { key: DecodingKey::from_secret(secret), validation }
	}
}

impl TokenVerifier for JwtVerifier {
	fn verify(&self, token: &str) -> ClResult<SessionClaims> {
		let token_data = decode::<SessionClaims>(token, &self.key, &self.validation).map_err(|e| {
			debug!("Rejected session token: {}", e);
			Error::Unauthorized
		})?;
		Ok(token_data.claims)
	}
}

impl std::fmt::Debug for JwtVerifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JwtVerifier").finish_non_exhaustive()
	}
}

/// Issue an HS256 session token. Used by development tooling and tests.
pub fn generate_token(
	secret: &[u8],
	sub: &str,
	roles: Option<&str>,
	ttl: time::Duration,
) -> ClResult<Box<str>> {
	let expire = time::SystemTime::now()
		.duration_since(time::UNIX_EPOCH)
		.map_err(|e| Error::Internal(format!("system clock before epoch: {}", e)))?
		.saturating_add(ttl)
		.as_secs();

	let claims = SessionClaims { sub: sub.into(), exp: expire, r: roles.map(Box::from) };
	let token = encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret))
		.map_err(|e| Error::Internal(format!("failed to sign token: {}", e)))?;

	Ok(token.into())
}

/// Session token of a request: bearer header first, then the token cookie
pub fn session_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
	get_bearer(headers).or_else(|| get_cookie(headers, cookie_name).filter(|t| !t.is_empty()))
}

/// Verified session claims, or `None` when the token is missing or invalid
pub fn authenticate(
	verifier: &dyn TokenVerifier,
	headers: &HeaderMap,
	cookie_name: &str,
) -> Option<SessionClaims> {
	let token = session_token(headers, cookie_name)?;
	verifier.verify(token).ok()
}


// vim: ts=4
