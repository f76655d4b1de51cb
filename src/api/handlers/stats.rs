//! Handlers for click statistics.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::{StatsListQuery, StatsListResponse, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Number of recent clicks returned with per-link statistics.
const RECENT_CLICKS_LIMIT: i64 = 50;

/// Detailed statistics for one short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .stats_service
        .stats_for_code(&code, RECENT_CLICKS_LIMIT)
        .await?;

    Ok(Json(stats.into()))
}

/// Aggregate click totals for all links, newest first.
///
/// # Endpoint
///
/// `GET /stats?limit=100&offset=0`
pub async fn stats_list_handler(
    Query(query): Query<StatsListQuery>,
    State(state): State<AppState>,
) -> Result<Json<StatsListResponse>, AppError> {
    let limit = query.limit.clamp(1, 1000);
    let offset = query.offset.max(0);

    let links = state.stats_service.list_links(limit, offset).await?;

    Ok(Json(StatsListResponse {
        links: links.into_iter().map(Into::into).collect(),
    }))
}
