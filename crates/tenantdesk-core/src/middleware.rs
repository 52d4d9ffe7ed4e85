//! Custom middlewares
//!
//! `classify_request` runs on every request and records the host
//! classification and session (if any) in the request extensions.
//! `access_gate` runs on page requests and applies the access router.

use axum::{
	extract::{Request, State},
	http::StatusCode,
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};

use tenantdesk_types::extract::RequestId;

use crate::access::AccessRequest;
use crate::auth::authenticate;
use crate::domain::{classify_host, request_host};
use crate::extract::Auth;
use crate::prelude::*;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn classify_request(State(app): State<App>, mut req: Request, next: Next) -> Response {
	let classification = classify_host(request_host(&req), &app.main_domains);
	let claims = authenticate(app.tokens.as_ref(), req.headers(), &app.opts.token_cookie);

	let req_id = req
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|h| h.to_str().ok())
		.map(|id| RequestId(id.to_string()));

	let extensions = req.extensions_mut();
	extensions.insert(classification);
	if let Some(claims) = claims {
		extensions.insert(Auth(claims));
	}
	if let Some(req_id) = req_id {
		extensions.insert(req_id);
	}

	next.run(req).await
}

pub async fn access_gate(State(app): State<App>, req: Request, next: Next) -> Response {
	let path = req.uri().path();
	if app.router.table().is_bypassed(path) {
		return next.run(req).await;
	}

	let Some(classification) = req.extensions().get::<DomainClassification>() else {
		return Error::Internal("access gate installed without host classification".into())
			.into_response();
	};
	let authenticated = req.extensions().get::<Auth>().is_some();

	let decision = app.router.route(&AccessRequest {
		path,
		is_central: classification.is_central,
		authenticated,
	});
	debug!(
		host = %classification.host,
		mode = classification.mode(),
		path = %path,
		authenticated,
		decision = %decision,
		"Access decision"
	);

	match decision {
		AccessDecision::Allow => next.run(req).await,
		AccessDecision::RedirectTo(location) => Redirect::temporary(&location).into_response(),
		AccessDecision::Deny(status) => deny(status),
	}
}

fn deny(status: StatusCode) -> Response {
	match status {
		StatusCode::NOT_FOUND => Error::NotFound.into_response(),
		StatusCode::FORBIDDEN => Error::PermissionDenied.into_response(),
		other => other.into_response(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{Router, body::Body, http::header, middleware, routing::get};
	use std::{path::Path, sync::Arc, time::Duration};
	use tenantdesk_settings::{
		AdvancedSettingsDocument, MergePolicy, SettingsDocument, StaticTenantSettings,
	};
	use tower::ServiceExt;

	use crate::access::AccessRouter;
	use crate::app::{AppBuilderOpts, AppState};
	use crate::auth::{JwtVerifier, TOKEN_COOKIE, generate_token};
	use crate::domain::MainDomains;

	const SECRET: &[u8] = b"middleware-secret";

	fn app() -> App {
		Arc::new(AppState {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:0".into(),
				dist_dir: Box::from(Path::new("dist")),
				token_cookie: TOKEN_COOKIE.into(),
				settings_cookie: "settings".into(),
				disable_cache: false,
			},
			main_domains: MainDomains::parse("admin.example.com"),
			router: AccessRouter::default(),
			tokens: Arc::new(JwtVerifier::hs256(SECRET)),
			settings_defaults: SettingsDocument::default(),
			advanced_defaults: AdvancedSettingsDocument::default(),
			tenant_settings: Arc::new(StaticTenantSettings::default()),
			merge_policy: MergePolicy::Presence,
		})
	}

	fn router(app: App) -> Router {
		Router::new()
			.route("/api/whoami", get(|c: DomainClassification| async move { c.mode() }))
			.fallback(|| async { "page" })
			.layer(middleware::from_fn_with_state(app.clone(), access_gate))
			.layer(middleware::from_fn_with_state(app, classify_request))
	}

	fn request(host: &str, path: &str, token: Option<&str>) -> Request {
		let mut builder = Request::builder().uri(path).header(header::HOST, host);
		if let Some(token) = token {
			builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
		}
		builder.body(Body::empty()).unwrap()
	}

	#[tokio::test]
	async fn test_redirect_without_session() {
		let res = router(app())
			.oneshot(request("acme.example.com", "/manage/groups", None))
			.await
			.unwrap();
		assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(res.headers()[header::LOCATION], "/login");
	}

	#[tokio::test]
	async fn test_denials_map_to_status() {
		let token = generate_token(SECRET, "op", None, Duration::from_secs(60)).unwrap();

		let res = router(app())
			.oneshot(request("admin.example.com", "/home", Some(&token)))
			.await
			.unwrap();
		assert_eq!(res.status(), StatusCode::NOT_FOUND);

		let res = router(app())
			.oneshot(request("acme.example.com", "/tenant-management", Some(&token)))
			.await
			.unwrap();
		assert_eq!(res.status(), StatusCode::FORBIDDEN);

		let res = router(app())
			.oneshot(request("admin.example.com", "/tenant-management", Some(&token)))
			.await
			.unwrap();
		assert_eq!(res.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn test_bypass_prefixes_skip_the_gate() {
		let res = router(app())
			.oneshot(request("admin.example.com", "/api/whoami", None))
			.await
			.unwrap();
		assert_eq!(res.status(), StatusCode::OK);
		let body = http_body_util::BodyExt::collect(res.into_body()).await.unwrap().to_bytes();
		assert_eq!(&body[..], b"central");
	}
}

// vim: ts=4
