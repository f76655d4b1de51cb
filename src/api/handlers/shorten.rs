//! Handler for short link creation.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten` with body `{ "url": "https://..." }`
///
/// The freshly created mapping is written to the resolution cache right
/// away so the first redirect skips the database.
///
/// # Errors
///
/// Returns 400 for a missing or invalid URL and 503 when the store is
/// unreachable or code generation exhausted its attempts.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(req): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    if req.url.trim().is_empty() {
        return Err(AppError::bad_request("Missing url", json!({})));
    }

    let link = state.link_service.create_short_link(req.url).await?;

    state.resolver.warm(&link.code, &link.long_url).await;

    Ok(Json(ShortenResponse {
        short_url: format!("{}/{}", state.base_url.trim_end_matches('/'), link.code),
        short_code: link.code,
        long_url: link.long_url,
    }))
}
