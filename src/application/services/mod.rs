//! Service layer orchestrating the core pipeline.
//!
//! - [`LinkService`] - short link creation with collision-checked code
//!   generation
//! - [`LinkResolver`] - cache-aside resolution of codes to long URLs
//! - [`ClickEnricher`] - derives an analytics record from raw request data
//! - [`StatsService`] - click statistics queries

pub mod click_enricher;
pub mod link_service;
pub mod resolver;
pub mod stats_service;

pub use click_enricher::ClickEnricher;
pub use link_service::LinkService;
pub use resolver::LinkResolver;
pub use stats_service::{DetailedStats, StatsService};
