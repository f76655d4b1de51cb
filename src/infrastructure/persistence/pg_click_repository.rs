//! PostgreSQL implementation of the click log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, LinkStats};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    short_code: String,
    ip_hash: String,
    country: String,
    city: String,
    user_agent: String,
    referrer: String,
    device: String,
    os: String,
    browser: String,
    utm_source: String,
    created_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            short_code: row.short_code,
            ip_hash: row.ip_hash,
            country: row.country,
            city: row.city,
            user_agent: row.user_agent,
            referrer: row.referrer,
            device: row.device,
            os: row.os,
            browser: row.browser,
            utm_source: row.utm_source,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LinkStatsRow {
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    total: i64,
}

/// PostgreSQL repository for the append-only click log.
///
/// Click rows reference links by code without a foreign key, so appends
/// never fail because of referential churn elsewhere.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row: ClickRow = sqlx::query_as(
            r#"
            INSERT INTO clicks
                (short_code, ip_hash, country, city, user_agent, referrer,
                 device, os, browser, utm_source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, short_code, ip_hash, country, city, user_agent,
                      referrer, device, os, browser, utm_source, created_at
            "#,
        )
        .bind(&new_click.short_code)
        .bind(&new_click.ip_hash)
        .bind(&new_click.country)
        .bind(&new_click.city)
        .bind(&new_click.user_agent)
        .bind(&new_click.referrer)
        .bind(&new_click.device)
        .bind(&new_click.os)
        .bind(&new_click.browser)
        .bind(&new_click.utm_source)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_by_code(&self, code: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE short_code = $1")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn recent_by_code(&self, code: &str, limit: i64) -> Result<Vec<Click>, AppError> {
        let rows: Vec<ClickRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, ip_hash, country, city, user_agent,
                   referrer, device, os, browser, utm_source, created_at
            FROM clicks
            WHERE short_code = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_link_stats(&self, limit: i64, offset: i64) -> Result<Vec<LinkStats>, AppError> {
        let rows: Vec<LinkStatsRow> = sqlx::query_as(
            r#"
            SELECT
                l.code,
                l.long_url,
                l.created_at,
                COUNT(c.id)::BIGINT AS total
            FROM links l
            LEFT JOIN clicks c ON c.short_code = l.code
            GROUP BY l.code, l.long_url, l.created_at
            ORDER BY l.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LinkStats {
                code: r.code,
                long_url: r.long_url,
                created_at: r.created_at,
                total: r.total,
            })
            .collect())
    }
}
