#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::click_event::ClickEvent;
use tinylink::infrastructure::cache::NullCache;
use tinylink::state::AppState;
use tokio::sync::mpsc;

pub const TEST_BASE_URL: &str = "https://s.example.com";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_click(pool: &PgPool, code: &str, country: &str) {
    sqlx::query(
        "INSERT INTO clicks (short_code, ip_hash, country, city, browser)
         VALUES ($1, $2, $3, 'Berlin', 'Firefox')",
    )
    .bind(code)
    .bind("f3d1a2b4c5e6f708")
    .bind(country)
    .execute(pool)
    .await
    .unwrap();
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        Arc::new(pool),
        Arc::new(NullCache::new()),
        tx,
        TEST_BASE_URL.to_string(),
        86_400,
    );

    (state, rx)
}
