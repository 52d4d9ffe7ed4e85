//! Session data in the request extensions

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::SessionClaims;
use crate::prelude::*;

/// Verified session of the request, inserted by the classification middleware
#[derive(Debug, Clone)]
pub struct Auth(pub SessionClaims);

// OptionalAuth //
//**************//
/// Session of the request if it carries a valid token. Never fails.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<SessionClaims>);

impl<S> FromRequestParts<S> for OptionalAuth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(OptionalAuth(parts.extensions.get::<Auth>().map(|auth| auth.0.clone())))
	}
}

// vim: ts=4
