//! Caching layer for fast redirect lookups and the volatile click counter.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching
//!
//! Both also implement [`crate::domain::repositories::ClickCounter`], so the
//! analytics counter rides on the same connection as the resolution cache.

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
