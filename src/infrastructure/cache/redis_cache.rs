//! Redis-backed cache and click counter implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::repositories::ClickCounter;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, info, warn};

const URL_KEY_PREFIX: &str = "url:";
const COUNTER_KEY_PREFIX: &str = "clickcount:";

/// Redis cache implementation for fast URL lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Cache operations are fail-open: errors are logged but don't
/// propagate to callers. The same connection doubles as the volatile click
/// counter backend.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_url`]
    ///   is called with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, code: &str) -> CacheResult<Option<String>> {
        let key = format!("{}{}", URL_KEY_PREFIX, code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {}", code);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", code);
                Ok(None)
            }
            Err(e) => {
                warn!("Redis GET error for {}: {}", code, e);
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        code: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = format!("{}{}", URL_KEY_PREFIX, code);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, long_url, ttl).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", code, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", code, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[async_trait]
impl ClickCounter for RedisCache {
    async fn increment(&self, code: &str) -> Result<(), AppError> {
        let key = format!("{}{}", COUNTER_KEY_PREFIX, code);
        let mut conn = self.client.clone();

        conn.incr::<_, _, i64>(&key, 1).await.map_err(|e| {
            AppError::store_unavailable(
                "Click counter unreachable",
                json!({ "source": e.to_string() }),
            )
        })?;

        Ok(())
    }
}
