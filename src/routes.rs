//! Route configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler, stats_list_handler,
};
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `GET  /{code}`       - Resolve and redirect
/// - `POST /shorten`      - Create a short link
/// - `GET  /stats`        - Aggregate click totals per link
/// - `GET  /stats/{code}` - Detailed statistics for one link
/// - `GET  /health`       - Database and cache health
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
