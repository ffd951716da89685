//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Form page routes.
///
/// # Endpoints
///
/// - `GET /` - Birthday form; renders facts when `?birthdate=` is present
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
