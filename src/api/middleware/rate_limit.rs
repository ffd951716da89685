//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Sustained requests per second allowed for each client IP.
const PER_SECOND: u64 = 2;
/// Requests a client may make in a burst before throttling starts.
const BURST_SIZE: u32 = 30;

/// Client IP source for rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientIpKeyExtractor {
    /// Socket peer address.
    Peer,
    /// `X-Forwarded-For`, `X-Real-IP` or `Forwarded`, falling back to the peer
    /// address. Only trustworthy behind a reverse proxy that sets them.
    Forwarded,
}

impl ClientIpKeyExtractor {
    pub fn new(behind_proxy: bool) -> Self {
        if behind_proxy {
            Self::Forwarded
        } else {
            Self::Peer
        }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        match self {
            Self::Peer => PeerIpKeyExtractor.extract(req),
            Self::Forwarded => SmartIpKeyExtractor.extract(req),
        }
    }
}

/// Creates a rate limiter for routes that trigger outbound scraping.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 30 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` unset, limits are applied per socket peer address, so
/// the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`. With `behind_proxy`
/// set, the client IP is read from proxy headers instead; enable it only when
/// a trusted reverse proxy sets them.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/facts", get(facts_handler))
///     .layer(rate_limit::layer(config.behind_proxy));
/// ```
pub fn layer(
    behind_proxy: bool,
) -> GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor::new(behind_proxy))
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;

    fn request(forwarded_for: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri("/api/facts");
        if let Some(ip) = forwarded_for {
            builder = builder.header("x-forwarded-for", ip);
        }
        let mut req = builder.body(()).unwrap();
        let peer: SocketAddr = "10.0.0.1:4000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));
        req
    }

    #[test]
    fn test_peer_ignores_forwarded_header() {
        let key = ClientIpKeyExtractor::new(false)
            .extract(&request(Some("203.0.113.7")))
            .unwrap();
        assert_eq!(key, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_reads_header() {
        let key = ClientIpKeyExtractor::new(true)
            .extract(&request(Some("203.0.113.7")))
            .unwrap();
        assert_eq!(key, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_falls_back_to_peer() {
        let key = ClientIpKeyExtractor::new(true).extract(&request(None)).unwrap();
        assert_eq!(key, "10.0.0.1".parse::<IpAddr>().unwrap());
    }
}
