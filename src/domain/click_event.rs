//! Click event model for asynchronous click tracking.

use std::net::SocketAddr;

/// Raw request context captured on the redirect path for async enrichment.
///
/// The handler only copies strings out of the request; every derived
/// attribute (client IP, geo, device class, attribution) is computed later
/// by the background worker so the redirect response never waits on it.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler with request metadata
/// 2. Sent to a bounded channel (non-blocking; dropped when full)
/// 3. Enriched and persisted by [`crate::domain::click_worker::run_click_worker`]
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub peer_addr: SocketAddr,
    pub forwarded_for: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub query: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event from raw request data.
    ///
    /// `forwarded_for` is the unparsed `X-Forwarded-For` header value and
    /// `query` the raw query string; both are interpreted by the enricher,
    /// not here.
    pub fn new(
        code: String,
        peer_addr: SocketAddr,
        forwarded_for: Option<&str>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
        query: Option<&str>,
    ) -> Self {
        Self {
            code,
            peer_addr,
            forwarded_for: forwarded_for.map(|s| s.to_string()),
            user_agent: user_agent.map(|s| s.to_string()),
            referrer: referrer.map(|s| s.to_string()),
            query: query.map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "203.0.113.5:51234".parse().unwrap()
    }

    #[test]
    fn test_click_event_creation_full() {
        let event = ClickEvent::new(
            "AbC1234".to_string(),
            peer(),
            Some("198.51.100.1"),
            Some("Mozilla/5.0"),
            Some("https://google.com"),
            Some("utm_source=newsletter"),
        );

        assert_eq!(event.code, "AbC1234");
        assert_eq!(event.peer_addr, peer());
        assert_eq!(event.forwarded_for.as_deref(), Some("198.51.100.1"));
        assert_eq!(event.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(event.referrer.as_deref(), Some("https://google.com"));
        assert_eq!(event.query.as_deref(), Some("utm_source=newsletter"));
    }

    #[test]
    fn test_click_event_creation_minimal() {
        let event = ClickEvent::new("xyz".to_string(), peer(), None, None, None, None);

        assert_eq!(event.code, "xyz");
        assert!(event.forwarded_for.is_none());
        assert!(event.user_agent.is_none());
        assert!(event.referrer.is_none());
        assert!(event.query.is_none());
    }
}
