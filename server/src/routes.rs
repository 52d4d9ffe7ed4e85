use axum::{
	Router,
	http::{HeaderValue, header},
	middleware,
	routing::get,
};
use tower_http::{
	services::{ServeDir, ServeFile},
	set_header::SetResponseHeaderLayer,
	trace::TraceLayer,
};

use tenantdesk_core::middleware::{access_gate, classify_request};

use crate::handler;
use crate::prelude::*;

fn init_api() -> Router<App> {
	Router::new()
		.route("/api/health", get(handler::get_health))
		.route("/api/context", get(handler::get_context))
		.route(
			"/api/settings",
			get(handler::get_settings).put(handler::put_settings).delete(handler::delete_settings),
		)
		.route("/api/settings/advanced", get(handler::get_advanced_settings))
}

/// Full router: API routes plus the console UI, with the access gate in front
pub fn init(app: App) -> Router {
	// Client-side routes have no file of their own, they all load the UI shell
	let index = app.opts.dist_dir.join("index.html");
	let console = ServeDir::new(&app.opts.dist_dir).fallback(ServeFile::new(index));

	let mut router = init_api().fallback_service(console);
	if app.opts.disable_cache {
		router = router.layer(SetResponseHeaderLayer::overriding(
			header::CACHE_CONTROL,
			HeaderValue::from_static("no-store"),
		));
	}

	router
		.layer(middleware::from_fn_with_state(app.clone(), access_gate))
		.layer(middleware::from_fn_with_state(app.clone(), classify_request))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
