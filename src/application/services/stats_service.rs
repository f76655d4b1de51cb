//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Click, ShortLink};
use crate::domain::repositories::{ClickRepository, LinkRepository, LinkStats};
use crate::error::AppError;

/// Detailed statistics for a single link.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub link: ShortLink,
    pub total: i64,
    pub recent: Vec<Click>,
}

/// Service for click statistics queries.
///
/// Totals come from the durable click log, not the volatile Redis counter;
/// the two are independent by design and this service reports the durable
/// side.
pub struct StatsService<L: LinkRepository, C: ClickRepository> {
    links: Arc<L>,
    clicks: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> StatsService<L, C> {
    /// Creates a new statistics service.
    pub fn new(links: Arc<L>, clicks: Arc<C>) -> Self {
        Self { links, clicks }
    }

    /// Retrieves detailed statistics for a short code: link metadata, the
    /// total click count, and the `recent_limit` most recent clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code and
    /// [`AppError::StoreUnavailable`] on database errors.
    pub async fn stats_for_code(
        &self,
        code: &str,
        recent_limit: i64,
    ) -> Result<DetailedStats, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let total = self.clicks.count_by_code(code).await?;
        let recent = self.clicks.recent_by_code(code, recent_limit).await?;

        Ok(DetailedStats {
            link,
            total,
            recent,
        })
    }

    /// Lists per-link aggregate click totals, newest link first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn list_links(&self, limit: i64, offset: i64) -> Result<Vec<LinkStats>, AppError> {
        self.clicks.list_link_stats(limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::Utc;

    fn stored_link() -> ShortLink {
        ShortLink::new(
            1,
            "AbC1234".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_stats_for_code_success() {
        let mut mock_links = MockLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(stored_link())));

        let mut mock_clicks = MockClickRepository::new();
        mock_clicks
            .expect_count_by_code()
            .times(1)
            .returning(|_| Ok(5));
        mock_clicks
            .expect_recent_by_code()
            .withf(|_, limit| *limit == 50)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let stats = service.stats_for_code("AbC1234", 50).await.unwrap();

        assert_eq!(stats.link.code, "AbC1234");
        assert_eq!(stats.total, 5);
        assert!(stats.recent.is_empty());
    }

    #[tokio::test]
    async fn test_stats_for_unknown_code() {
        let mut mock_links = MockLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let mock_clicks = MockClickRepository::new();

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let result = service.stats_for_code("ZZZ9999", 50).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_links_delegates_to_repository() {
        let mock_links = MockLinkRepository::new();

        let mut mock_clicks = MockClickRepository::new();
        mock_clicks
            .expect_list_link_stats()
            .withf(|limit, offset| *limit == 100 && *offset == 0)
            .times(1)
            .returning(|_, _| {
                Ok(vec![LinkStats {
                    code: "AbC1234".to_string(),
                    long_url: "https://example.com".to_string(),
                    created_at: Utc::now(),
                    total: 3,
                }])
            });

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_clicks));

        let stats = service.list_links(100, 0).await.unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total, 3);
    }
}
