//! Health check handler.

use axum::{Json, extract::State};

use crate::api::dto::HealthResponse;
use crate::state::AppState;

/// Reports database and cache health.
///
/// # Endpoint
///
/// `GET /health`
///
/// A degraded cache does not fail the check - the service keeps redirecting
/// from the database without it.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.pool.as_ref())
        .await
        .is_ok();

    let cache = state.cache.health_check().await;

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        cache,
    })
}
