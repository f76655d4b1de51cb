//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Response body for `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
}
