//! Repository trait for the durable short link store.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, authoritative store of short links.
///
/// The store is the single source of truth for code-to-URL mappings; the
/// resolution cache only ever holds values that were read from (or written
/// through) this interface.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// The insert itself is the uniqueness check: a concurrent create of the
    /// same code surfaces as [`AppError::DuplicateKey`] here rather than
    /// relying on a racy check-then-insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the code already exists and
    /// [`AppError::StoreUnavailable`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Returns whether a code is already present in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;
}
