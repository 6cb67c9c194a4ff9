//! AI Tools Hub site library.
//!
//! This crate provides the site as a library so the router can be exercised
//! by the integration tests as well as the server binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod content;
pub mod directory;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router.
///
/// Applies the full middleware stack from `crate::middleware`. The Sentry
/// tower layers are added in `main` so tests run without a Sentry hub.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        // The span declares request_id empty so the request ID middleware
        // can record it once the ID is known
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        // Static assets skip the page middleware above
        .nest_service("/static", ServeDir::new("crates/site/static"))
        .with_state(state)
}
