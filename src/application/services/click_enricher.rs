//! Derives an analytics record from raw request context.

use std::sync::Arc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::infrastructure::geoip::GeoResolver;
use crate::utils::ip::{client_ip, hash_ip};
use crate::utils::user_agent::parse_user_agent;

/// Value recorded for country/city when geo resolution fails.
const UNKNOWN_LOCATION: &str = "Unknown";

/// Turns a [`ClickEvent`] into a persistable [`NewClick`].
///
/// Every step is best-effort: geo misses become `"Unknown"`, unparsable
/// user agents become empty strings, and a missing query string simply
/// yields no attribution. Enrichment itself is infallible - the caller
/// always gets a record to write.
///
/// The raw client IP exists only inside [`ClickEnricher::enrich`]; what
/// leaves is the truncated keyed hash.
pub struct ClickEnricher {
    geo: Arc<dyn GeoResolver>,
    ip_hash_secret: String,
}

impl ClickEnricher {
    /// Creates a new enricher.
    pub fn new(geo: Arc<dyn GeoResolver>, ip_hash_secret: String) -> Self {
        Self {
            geo,
            ip_hash_secret,
        }
    }

    /// Derives the full click record from raw request data.
    pub fn enrich(&self, event: ClickEvent) -> NewClick {
        let ip = client_ip(event.forwarded_for.as_deref(), &event.peer_addr);
        let ip_hash = hash_ip(&ip, &self.ip_hash_secret);

        let geo = self.geo.lookup(&ip).unwrap_or_default();
        let country = non_empty_or(geo.country, UNKNOWN_LOCATION);
        let city = non_empty_or(geo.city, UNKNOWN_LOCATION);

        let ua_info = parse_user_agent(event.user_agent.as_deref().unwrap_or(""));

        let utm_source = event
            .query
            .as_deref()
            .map(extract_utm_source)
            .unwrap_or_default();

        NewClick {
            short_code: event.code,
            ip_hash,
            country,
            city,
            user_agent: event.user_agent.unwrap_or_default(),
            referrer: event.referrer.unwrap_or_default(),
            device: ua_info.device,
            os: ua_info.os,
            browser: ua_info.browser,
            utm_source,
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Pulls the `utm_source` parameter out of a raw query string.
fn extract_utm_source(query: &str) -> String {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "utm_source")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
