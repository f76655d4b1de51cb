//! Short link creation service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Maximum candidate codes drawn before giving up on generation.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating shortened links.
///
/// Handles URL normalization and collision-checked code generation against
/// the durable store.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `long_url`.
    ///
    /// # Code Generation
    ///
    /// Candidates are drawn from the CSPRNG and checked for existence before
    /// use, at most [`MAX_GENERATION_ATTEMPTS`] times. The insert itself
    /// still enforces uniqueness, so if a concurrent create wins the race
    /// between check and insert, the resulting `DuplicateKey` triggers one
    /// retry with a freshly generated code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-HTTP(S) URLs
    /// and [`AppError::StoreUnavailable`] when the store cannot be reached
    /// or no collision-free code was found within the attempt budget.
    pub async fn create_short_link(&self, long_url: String) -> Result<ShortLink, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let code = self.generate_unique_code().await?;

        match self
            .repository
            .create(NewShortLink {
                code,
                long_url: normalized_url.clone(),
            })
            .await
        {
            Ok(link) => Ok(link),
            Err(AppError::DuplicateKey { .. }) => {
                // Lost the check-then-insert race; one retry with a fresh code.
                let code = self.generate_unique_code().await?;
                self.repository
                    .create(NewShortLink {
                        code,
                        long_url: normalized_url,
                    })
                    .await
            }
            Err(e) => Err(e),
        }
    }

    /// Generates a code that did not exist in the store at the moment of
    /// check, bounded by [`MAX_GENERATION_ATTEMPTS`].
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if !self.repository.exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::store_unavailable(
            "Failed to generate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn created_link(new_link: &NewShortLink) -> ShortLink {
        ShortLink::new(
            10,
            new_link.code.clone(),
            new_link.long_url.clone(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com/");
        assert_eq!(link.code.len(), 7);
    }

    #[tokio::test]
    async fn test_create_short_link_normalizes_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.long_url == "https://example.com/path")
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://EXAMPLE.COM:443/path".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("not-a-url".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_retries_on_colliding_candidate() {
        let mut mock_repo = MockLinkRepository::new();

        let mut existence = vec![Ok(false), Ok(true)];
        mock_repo
            .expect_exists()
            .times(2)
            .returning(move |_| existence.pop().unwrap());
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(created_link(&new_link)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_gives_up_after_bounded_attempts() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StoreUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_retries_once_on_duplicate_key() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(2).returning(|_| Ok(false));

        let mut outcomes: Vec<Box<dyn FnOnce(&NewShortLink) -> Result<ShortLink, AppError> + Send>> = vec![
            Box::new(|new_link| Ok(created_link(new_link))),
            Box::new(|_| {
                Err(AppError::duplicate_key(
                    "Unique constraint violation",
                    json!({}),
                ))
            }),
        ];
        mock_repo
            .expect_create()
            .times(2)
            .returning(move |new_link| (outcomes.pop().unwrap())(&new_link));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| {
            Err(AppError::store_unavailable(
                "Database error",
                json!({}),
            ))
        });
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StoreUnavailable { .. }
        ));
    }
}
