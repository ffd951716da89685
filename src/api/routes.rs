//! API route configuration.

use crate::api::handlers::{facts_handler, weekdays_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /facts?birthdate=YYYY-MM-DD`    - Full birthday report (scrapes two sites)
/// - `GET /weekdays?birthdate=YYYY-MM-DD` - Weekday distribution only
///
/// Only `/facts` is rate limited since `/weekdays` never leaves the process.
/// See [`rate_limit::layer`] for `behind_proxy`.
pub fn api_routes(behind_proxy: bool) -> Router<AppState> {
    Router::new()
        .merge(scraping_routes().layer(rate_limit::layer(behind_proxy)))
        .merge(local_routes())
}

/// Routes that trigger outbound requests, without the rate limiter.
pub fn scraping_routes() -> Router<AppState> {
    Router::new().route("/facts", get(facts_handler))
}

/// Routes computed entirely from local data.
pub fn local_routes() -> Router<AppState> {
    Router::new().route("/weekdays", get(weekdays_handler))
}
