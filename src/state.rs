//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{LinkResolver, LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};

/// Explicitly constructed dependencies shared by all handlers.
///
/// Everything here is an `Arc` to a read-mostly resource built once at
/// startup; there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub base_url: String,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub resolver: Arc<LinkResolver<PgLinkRepository>>,
    pub stats_service: Arc<StatsService<PgLinkRepository, PgClickRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires up services over a database pool and cache.
    pub fn new(
        pool: Arc<PgPool>,
        cache: Arc<dyn CacheService>,
        click_tx: mpsc::Sender<ClickEvent>,
        base_url: String,
        cache_ttl_seconds: u64,
    ) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(Arc::clone(&pool)));
        let click_repository = Arc::new(PgClickRepository::new(Arc::clone(&pool)));

        let link_service = Arc::new(LinkService::new(Arc::clone(&link_repository)));
        let resolver = Arc::new(LinkResolver::new(
            Arc::clone(&link_repository),
            Arc::clone(&cache),
            cache_ttl_seconds,
        ));
        let stats_service = Arc::new(StatsService::new(link_repository, click_repository));

        Self {
            pool,
            base_url,
            link_service,
            resolver,
            stats_service,
            cache,
            click_tx,
        }
    }
}
