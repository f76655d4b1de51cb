//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, RawQuery, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject paths that cannot be a short code without touching any store
/// 2. Resolve via cache-aside lookup (cache, then database)
/// 3. Capture raw request context into a [`ClickEvent`] and send it to the
///    bounded analytics channel - `try_send`, so a full queue drops the
///    click instead of delaying the response
/// 4. Return 307 Temporary Redirect
///
/// The redirect never waits for enrichment; by the time the click record is
/// durable the response is usually long gone.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let long_url = state.resolver.resolve(&code).await?;

    let click_event = ClickEvent::new(
        code,
        addr,
        header_str(&headers, "x-forwarded-for"),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
        query.as_deref(),
    );

    let _ = state.click_tx.try_send(click_event);

    Ok(Redirect::temporary(&long_url))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
