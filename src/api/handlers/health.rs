//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Reference data**: Zodiac table is loaded and non-empty
/// 2. **Clock**: Reports today's date in the reference time zone
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "reference_data": { "status": "ok", "message": "12 zodiac ranges" },
///     "clock": { "status": "ok", "message": "2024-10-19 (EST5EDT)" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let reference_check = check_reference_data(&state);
    let clock_check = check_clock(&state);

    let all_healthy = reference_check.status == "ok" && clock_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            reference_data: reference_check,
            clock: clock_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the zodiac table has at least one range.
fn check_reference_data(state: &AppState) -> CheckStatus {
    let ranges = state.facts_service.reference().zodiac.len();
    if ranges == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Zodiac table is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} zodiac ranges", ranges)),
        }
    }
}

/// Reports the current date in the reference time zone.
fn check_clock(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} ({})",
            state.facts_service.today(),
            state.timezone
        )),
    }
}
