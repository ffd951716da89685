//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level carrying the method, URI and HTTP version.
/// - Scraped-fact warnings emitted by the handler are recorded inside this span.
///
/// **On Response:**
/// - Logs status code and latency in milliseconds at `INFO` level.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/facts?birthdate=2000-01-01 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/api/facts?birthdate=2000-01-01 version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes(config.behind_proxy))
///     .layer(tracing::layer());
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
