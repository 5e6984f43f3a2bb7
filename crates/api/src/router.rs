//! Assembles the Airdesk HTTP surface.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so
//! tests exercise the real layer order against mock backends.

use std::time::Duration;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RANGE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Mount `/health`, the raw `/proxy/traffic/*` and `/proxy/music/*`
/// passthroughs, and the typed `/api/v1/traffic` and `/api/v1/music` tables.
///
/// Every request, proxied or typed, gets an `x-request-id` that is echoed on
/// the response. The outer timeout bounds
/// handler time; streamed audio bodies keep flowing after the handler
/// returns.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        // Verbatim passthrough, no bearer check.
        .merge(routes::proxy::router())
        .nest("/api/v1", routes::api_routes())
        // Layers run bottom-up: CORS first, panic recovery innermost.
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS for the two browser frontends listed in `CORS_ORIGINS`.
///
/// `RANGE` is allowed so the admin's audio player can seek through a
/// submission preview; `ACCEPT` lets the proxy routes negotiate content.
/// Panics on an unparsable origin.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT, RANGE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
