//! Request and response types for the JSON API.

pub mod health;
pub mod shorten;
pub mod stats;

pub use health::HealthResponse;
pub use shorten::{ShortenRequest, ShortenResponse};
pub use stats::{ClickDto, LinkStatsDto, StatsListQuery, StatsListResponse, StatsResponse};
