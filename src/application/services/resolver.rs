//! Cache-aside resolution of short codes to long URLs.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves short codes to their redirect targets.
///
/// Lookup order is cache first, durable store second. The cache is never
/// authoritative: a resolver call only ever returns values that were read
/// from the store at some point, and any cache failure silently degrades to
/// a store lookup. Concurrent resolutions of the same code may race to
/// repopulate the cache; since link values are immutable, last write wins
/// harmlessly.
pub struct LinkResolver<R: LinkRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl<R: LinkRepository> LinkResolver<R> {
    /// Creates a new resolver.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, cache_ttl_seconds: u64) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Resolves `code` to its long URL.
    ///
    /// On a cache miss the durable store is consulted and, when the code is
    /// found, the mapping is written back to the cache with the configured
    /// TTL. The cache write is best-effort: a failure is logged and the
    /// resolution still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is absent from the
    /// durable store and [`AppError::StoreUnavailable`] when the store
    /// cannot be reached.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if let Ok(Some(cached_url)) = self.cache.get_url(code).await {
            debug!("Cache HIT for {}", code);
            return Ok(cached_url);
        }

        debug!("Cache MISS for {}", code);

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        self.warm(code, &link.long_url).await;

        Ok(link.long_url)
    }

    /// Best-effort cache write of a known mapping.
    ///
    /// Also used by the shorten path to pre-warm the cache for a freshly
    /// created link.
    pub async fn warm(&self, code: &str, long_url: &str) {
        if let Err(e) = self
            .cache
            .set_url(code, long_url, Some(self.cache_ttl_seconds))
            .await
        {
            warn!("Failed to cache resolution for {}: {}", code, e);
        }
    }
}
