//! Birthday form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::application::services::FactsService;
use crate::domain::calendar::MIN_BIRTHDATE;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::FactsView;

/// Form submission; absent or blank on first visit.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub birthdate: Option<String>,
}

/// Template for the form page.
///
/// Renders `templates/index.html` with:
/// - Date input bounded to `[min_date, max_date]`
/// - Inline validation error, if any
/// - Weekday chart and fact list once a birthdate is submitted
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub min_date: String,
    pub max_date: String,
    pub birthdate: String,
    pub error: Option<String>,
    pub facts: Option<FactsView>,
}

/// Renders the birthday form and, when submitted, its facts.
///
/// # Endpoint
///
/// `GET /` or `GET /?birthdate=YYYY-MM-DD`
///
/// # Errors
///
/// An invalid birthdate re-renders the form with the message inline and a
/// `400 Bad Request` status.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Response {
    let service = &state.facts_service;

    let mut page = IndexTemplate {
        min_date: MIN_BIRTHDATE.to_string(),
        max_date: service.today().to_string(),
        birthdate: String::new(),
        error: None,
        facts: None,
    };

    let Some(input) = query
        .birthdate
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return page.into_response();
    };

    let outcome = build_facts(service, &input).await;
    page.birthdate = input;

    match outcome {
        Ok(facts) => {
            page.facts = Some(facts);
            page.into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejected birthdate");
            page.error = Some(e.message().to_string());
            (StatusCode::BAD_REQUEST, page).into_response()
        }
    }
}

async fn build_facts(service: &FactsService, input: &str) -> Result<FactsView, AppError> {
    let birthdate = service.parse_birthdate(input)?;
    let report = service.report(birthdate).await?;
    Ok(report.into())
}
