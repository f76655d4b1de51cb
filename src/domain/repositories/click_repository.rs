//! Repository traits for the analytics sinks.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregated click totals for a single link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub total: i64,
}

/// Append-only durable click log.
///
/// Writes here are best-effort: the enrichment worker logs and drops a
/// failed append instead of propagating it anywhere near the redirect path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts recorded clicks for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count_by_code(&self, code: &str) -> Result<i64, AppError>;

    /// Returns the most recent clicks for a short code, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn recent_by_code(&self, code: &str, limit: i64) -> Result<Vec<Click>, AppError>;

    /// Lists per-link aggregate totals, newest link first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn list_link_stats(&self, limit: i64, offset: i64) -> Result<Vec<LinkStats>, AppError>;
}

/// Volatile incrementing counter keyed by short code.
///
/// A cheap aggregate kept alongside the durable click log; the two are
/// written independently and are not reconciled.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis `INCR` per code
/// - [`crate::infrastructure::cache::NullCache`] - no-op when Redis is disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickCounter: Send + Sync {
    /// Increments the click counter for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the counter backend is
    /// unreachable; the caller logs and drops the increment.
    async fn increment(&self, code: &str) -> Result<(), AppError>;
}
