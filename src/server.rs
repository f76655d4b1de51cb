//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::ClickEnricher;
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::ClickCounter;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::geoip::{GeoResolver, MaxMindGeoResolver, NullGeoResolver};
use crate::infrastructure::persistence::PgClickRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache and click counter (or NullCache fallback)
/// - GeoIP reader (or null fallback)
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    // The Redis connection doubles as resolution cache and click counter;
    // both degrade to no-ops when Redis is unavailable.
    let (cache, counter): (Arc<dyn CacheService>, Arc<dyn ClickCounter>) =
        match &config.redis_url {
            Some(redis_url) => {
                match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
                    Ok(redis) => {
                        tracing::info!("Cache enabled (Redis)");
                        let redis = Arc::new(redis);
                        (
                            Arc::clone(&redis) as Arc<dyn CacheService>,
                            redis as Arc<dyn ClickCounter>,
                        )
                    }
                    Err(e) => {
                        tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                        let null = Arc::new(NullCache::new());
                        (
                            Arc::clone(&null) as Arc<dyn CacheService>,
                            null as Arc<dyn ClickCounter>,
                        )
                    }
                }
            }
            None => {
                tracing::info!("Cache disabled (NullCache)");
                let null = Arc::new(NullCache::new());
                (
                    Arc::clone(&null) as Arc<dyn CacheService>,
                    null as Arc<dyn ClickCounter>,
                )
            }
        };

    let geo: Arc<dyn GeoResolver> = match &config.geoip_db_path {
        Some(path) => match MaxMindGeoResolver::open(path) {
            Ok(reader) => Arc::new(reader),
            Err(e) => {
                tracing::warn!(
                    "Failed to load GeoIP database from {}: {}. Locations will be Unknown.",
                    path,
                    e
                );
                Arc::new(NullGeoResolver)
            }
        },
        None => {
            tracing::info!("GeoIP disabled, locations will be Unknown");
            Arc::new(NullGeoResolver)
        }
    };

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    let pool = Arc::new(pool);
    let enricher = Arc::new(ClickEnricher::new(geo, config.ip_hash_secret.clone()));
    let click_repository = Arc::new(PgClickRepository::new(Arc::clone(&pool)));

    tokio::spawn(run_click_worker(
        click_rx,
        enricher,
        click_repository,
        counter,
        config.click_worker_concurrency,
    ));
    tracing::info!("Click worker started");

    let state = AppState::new(
        pool,
        cache,
        click_tx,
        config.base_url.clone(),
        config.cache_ttl_seconds,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
///
/// In-flight enrichment tasks are detached and may not finish; dropped
/// clicks on shutdown are an accepted loss.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
