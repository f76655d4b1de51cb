//! IP geolocation against a local MaxMind city database.
//!
//! Provides a [`GeoResolver`] trait with two implementations:
//! - [`MaxMindGeoResolver`] - reads a GeoLite2-City database loaded once at
//!   process start
//! - [`NullGeoResolver`] - used when no database is configured; every lookup
//!   misses and the pipeline falls back to `"Unknown"`

mod maxmind;
mod null;
mod resolver;

pub use maxmind::MaxMindGeoResolver;
pub use null::NullGeoResolver;
pub use resolver::{GeoLocation, GeoResolver};
