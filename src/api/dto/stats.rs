//! DTOs for the statistics endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::DetailedStats;
use crate::domain::entities::Click;
use crate::domain::repositories::LinkStats;

/// One enriched click as returned by `GET /stats/{code}`.
///
/// Only derived attributes are exposed; the IP hash stays internal.
#[derive(Debug, Serialize)]
pub struct ClickDto {
    pub country: String,
    pub city: String,
    pub user_agent: String,
    pub referrer: String,
    pub device: String,
    pub os: String,
    pub browser: String,
    pub utm_source: String,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickDto {
    fn from(click: Click) -> Self {
        Self {
            country: click.country,
            city: click.city,
            user_agent: click.user_agent,
            referrer: click.referrer,
            device: click.device,
            os: click.os,
            browser: click.browser,
            utm_source: click.utm_source,
            created_at: click.created_at,
        }
    }
}

/// Response body for `GET /stats/{code}`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
    pub recent_clicks: Vec<ClickDto>,
}

impl From<DetailedStats> for StatsResponse {
    fn from(stats: DetailedStats) -> Self {
        Self {
            short_code: stats.link.code,
            long_url: stats.link.long_url,
            created_at: stats.link.created_at,
            total_clicks: stats.total,
            recent_clicks: stats.recent.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pagination parameters for `GET /stats`.
#[derive(Debug, Deserialize)]
pub struct StatsListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

/// One link with its aggregate click total.
#[derive(Debug, Serialize)]
pub struct LinkStatsDto {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
}

impl From<LinkStats> for LinkStatsDto {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.code,
            long_url: stats.long_url,
            created_at: stats.created_at,
            total_clicks: stats.total,
        }
    }
}

/// Response body for `GET /stats`.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub links: Vec<LinkStatsDto>,
}
