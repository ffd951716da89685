//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Birthday form and facts page
//! - `GET  /health`      - Health check: reference data, clock
//! - `/api/*`            - JSON API
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on routes that scrape third-party sites
//!   (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// The server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the rate limiter
/// can read the peer address.
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let pages = web::routes::page_routes().layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes(behind_proxy))
        .merge(pages)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
