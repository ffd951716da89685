//! Handlers for the birthday facts endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::facts::{BirthdateQuery, FactsResponse, WeekdaysResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every fact for a birthdate.
///
/// # Endpoint
///
/// `GET /api/facts?birthdate=YYYY-MM-DD`
///
/// # Response
///
/// ```json
/// {
///   "today": "2005-06-15",
///   "birthdate": "2000-01-01",
///   "is_birthday": false,
///   "age": 5,
///   "weekday_born": "Saturday",
///   "zodiac": { "status": "known", "sign": "Capricorn" },
///   "weekdays": {
///     "total": 5,
///     "counts": [{ "weekday": "Monday", "count": 1 }]
///   },
///   "moon_phase": { "status": "available", "value": { "phase": "Waning Crescent", "illumination": "21%", "source_url": "..." } },
///   "notable_people": { "status": "unavailable", "reason": "..." }
/// }
/// ```
///
/// Scraped facts that fail are reported as `unavailable`; the response is still
/// `200 OK`.
///
/// # Errors
///
/// Returns 400 Bad Request if the birthdate is malformed, before 1900-01-01 or
/// after today.
pub async fn facts_handler(
    State(state): State<AppState>,
    Query(params): Query<BirthdateQuery>,
) -> Result<Json<FactsResponse>, AppError> {
    params.validate()?;

    let birthdate = state.facts_service.parse_birthdate(&params.birthdate)?;
    let report = state.facts_service.report(birthdate).await?;

    Ok(Json(report.into()))
}

/// Returns only the weekday distribution of past birthdays.
///
/// # Endpoint
///
/// `GET /api/weekdays?birthdate=YYYY-MM-DD`
///
/// Makes no outbound requests.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid birthdate.
pub async fn weekdays_handler(
    State(state): State<AppState>,
    Query(params): Query<BirthdateQuery>,
) -> Result<Json<WeekdaysResponse>, AppError> {
    params.validate()?;

    let service = &state.facts_service;
    let birthdate = service.parse_birthdate(&params.birthdate)?;
    let distribution = service.weekday_distribution(birthdate, service.today())?;

    Ok(Json(WeekdaysResponse {
        total: distribution.total(),
        counts: distribution.into_inner(),
    }))
}
