//! Shared HTTP fetcher for the scraped facts.

use std::time::Duration;

use reqwest::Client;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::debug;

use crate::domain::ports::FetchError;

const USER_AGENT: &str = concat!("birthday-facts/", env!("CARGO_PKG_VERSION"));

/// GETs HTML pages with a timeout and retries on transient failures.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    retries: usize,
}

impl HttpFetcher {
    /// Builds a fetcher with a per-request `timeout` and up to `retries`
    /// additional attempts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration, retries: usize) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request {
                url: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self { client, retries })
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// Request errors, 429 and 5xx responses are retried with exponential
    /// backoff; other failures return immediately.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] or [`FetchError::Status`] once retries
    /// are exhausted.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let strategy = ExponentialBackoff::from_millis(10)
            .factor(10)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.retries);

        RetryIf::start(
            strategy,
            || self.get_once(url),
            |e: &FetchError| {
                let retry = e.is_transient();
                if retry {
                    debug!(url, error = %e, "Retrying fetch");
                }
                retry
            },
        )
        .await
    }

    async fn get_once(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |e: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let resp = self.client.get(url).send().await.map_err(request_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(request_error)
    }
}
