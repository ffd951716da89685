use std::sync::Arc;

use crate::application::services::FactsService;

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub facts_service: Arc<FactsService>,
    /// Name of the reference time zone, reported by the health check.
    pub timezone: String,
}

impl AppState {
    pub fn new(facts_service: Arc<FactsService>, timezone: impl Into<String>) -> Self {
        Self {
            facts_service,
            timezone: timezone.into(),
        }
    }
}
