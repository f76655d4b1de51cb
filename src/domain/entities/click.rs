//! Click entity representing a single enriched redirect event.

use chrono::{DateTime, Utc};

/// One recorded redirect event with derived analytics attributes.
///
/// `short_code` references a [`crate::domain::entities::ShortLink`] by code
/// without foreign-key enforcement; the click log is best-effort analytics,
/// not relational truth. `ip_hash` is a one-way digest - the raw client IP
/// is never persisted.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub short_code: String,
    pub ip_hash: String,
    pub country: String,
    pub city: String,
    pub user_agent: String,
    pub referrer: String,
    pub device: String,
    pub os: String,
    pub browser: String,
    pub utm_source: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for appending a click to the analytics log.
///
/// Geo fields default to `"Unknown"` and the remaining derived fields to
/// empty strings when enrichment could not classify them; the record is
/// written regardless.
#[derive(Debug, Clone, Default)]
pub struct NewClick {
    pub short_code: String,
    pub ip_hash: String,
    pub country: String,
    pub city: String,
    pub user_agent: String,
    pub referrer: String,
    pub device: String,
    pub os: String,
    pub browser: String,
    pub utm_source: String,
}
