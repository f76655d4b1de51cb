mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewShortLink;
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::PgLinkRepository;

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let new_link = NewShortLink {
        code: "AbC1234".to_string(),
        long_url: "https://example.com".to_string(),
    };

    let link = repo.create(new_link).await.unwrap();

    assert_eq!(link.code, "AbC1234");
    assert_eq!(link.long_url, "https://example.com");
    assert!(link.id > 0);
}

#[sqlx::test]
async fn test_create_duplicate_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let new_link = NewShortLink {
        code: "AbC1234".to_string(),
        long_url: "https://example.com".to_string(),
    };
    repo.create(new_link.clone()).await.unwrap();

    let result = repo.create(new_link).await;

    assert!(matches!(result.unwrap_err(), AppError::DuplicateKey { .. }));
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    common::create_test_link(&pool, "AbC1234", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.exists("AbC1234").await.unwrap());
    assert!(!repo.exists("ZZZ9999").await.unwrap());
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_link(&pool, "AbC1234", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("AbC1234").await.unwrap().unwrap();

    assert_eq!(link.code, "AbC1234");
    assert_eq!(link.long_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("ZZZ9999").await.unwrap();

    assert!(result.is_none());
}
