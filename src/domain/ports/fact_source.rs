//! Contracts for facts fetched from third-party sites.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::{MoonPhase, NotablePeople};

/// Errors returned by external fact sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure or timeout.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The site answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The page was fetched but the expected markup was missing.
    #[error("could not parse {url}: {message}")]
    Parse { url: String, message: String },

    /// The source is switched off (offline mode).
    #[error("source disabled")]
    Disabled,
}

impl FetchError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Parse { .. } | Self::Disabled => false,
        }
    }
}

/// Looks up the lunar phase for a calendar date.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoonPhaseSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError`] when the page cannot be fetched or parsed.
    async fn moon_phase(&self, date: NaiveDate) -> Result<MoonPhase, FetchError>;
}

/// Lists notable people born on a month/day.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotablePeopleSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError`] when the page cannot be fetched or parsed.
    async fn notable_people(&self, month: u32, day: u32) -> Result<NotablePeople, FetchError>;
}
