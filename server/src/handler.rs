//! Gateway API handlers

use axum::{
	Json,
	extract::{State, rejection::JsonRejection},
	http::{HeaderMap, header},
	response::IntoResponse,
};
use serde::Serialize;

use tenantdesk_core::access::login_path;
use tenantdesk_core::extract::OptionalAuth;
use tenantdesk_settings::{AdvancedSettingsDocument, PartialSettings, SettingsDocument, cookie};
use tenantdesk_types::extract::OptionalRequestId;

use crate::prelude::*;

fn respond<T>(data: T, req_id: Option<String>) -> Json<ApiResponse<T>> {
	let res = ApiResponse::new(data);
	Json(match req_id {
		Some(req_id) => res.with_req_id(req_id),
		None => res,
	})
}

// Health //
//********//
#[derive(Debug, Serialize)]
pub struct Health {
	pub status: &'static str,
	pub version: &'static str,
}

pub async fn get_health() -> Json<Health> {
	Json(Health { status: "ok", version: tenantdesk_core::app::VERSION })
}

// Context //
//*********//
/// What the console needs to know about its own host before rendering
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleContext {
	#[serde(flatten)]
	pub classification: DomainClassification,
	pub mode: &'static str,
	pub login_path: &'static str,
	pub signed_in: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user: Option<Box<str>>,
	pub roles: Vec<Box<str>>,
}

pub async fn get_context(
	classification: DomainClassification,
	OptionalAuth(session): OptionalAuth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> Json<ApiResponse<ConsoleContext>> {
	let roles = session.as_ref().map(|s| s.roles().map(Box::from).collect()).unwrap_or_default();
	let context = ConsoleContext {
		mode: classification.mode(),
		login_path: login_path(classification.is_central),
		signed_in: session.is_some(),
		user: session.map(|s| s.sub),
		roles,
		classification,
	};
	respond(context, req_id)
}

// Settings //
//**********//
pub async fn get_settings(
	State(app): State<App>,
	classification: DomainClassification,
	OptionalRequestId(req_id): OptionalRequestId,
	headers: HeaderMap,
) -> Json<ApiResponse<SettingsDocument>> {
	let stored = cookie::from_headers(&headers, &app.opts.settings_cookie);
	let store = app.settings_store(&classification.host, stored.as_ref()).await;
	respond(store.snapshot(), req_id)
}

pub async fn put_settings(
	State(app): State<App>,
	classification: DomainClassification,
	OptionalRequestId(req_id): OptionalRequestId,
	headers: HeaderMap,
	body: Result<Json<PartialSettings>, JsonRejection>,
) -> ClResult<impl IntoResponse> {
	let Json(partial) = body.map_err(|e| Error::ValidationError(e.body_text()))?;
	let stored = cookie::from_headers(&headers, &app.opts.settings_cookie);
	let store = app.settings_store(&classification.host, stored.as_ref()).await;
	let settings = store.update(&partial);

	let set_cookie = cookie::set_cookie(&app.opts.settings_cookie, &settings)?;
	debug!(host = %classification.host, "Settings updated");

	Ok(([(header::SET_COOKIE, set_cookie)], respond(settings, req_id)))
}

pub async fn delete_settings(
	State(app): State<App>,
	classification: DomainClassification,
	OptionalRequestId(req_id): OptionalRequestId,
) -> impl IntoResponse {
	let settings = app.settings_store(&classification.host, None).await.snapshot();
	debug!(host = %classification.host, "Settings reset");

	([(header::SET_COOKIE, cookie::clear_cookie(&app.opts.settings_cookie))], respond(settings, req_id))
}

pub async fn get_advanced_settings(
	State(app): State<App>,
	classification: DomainClassification,
	OptionalRequestId(req_id): OptionalRequestId,
) -> Json<ApiResponse<AdvancedSettingsDocument>> {
	respond(app.resolve_advanced(&classification.host).await, req_id)
}

// vim: ts=4
