//! Fallback geo resolver used when no database is configured.

use super::resolver::{GeoLocation, GeoResolver};

/// A resolver whose lookups always miss.
///
/// Selected at startup when `GEOIP_DB_PATH` is unset or the database fails
/// to load; enriched clicks then carry `"Unknown"` for country and city.
pub struct NullGeoResolver;

impl GeoResolver for NullGeoResolver {
    fn lookup(&self, _ip: &str) -> Option<GeoLocation> {
        None
    }
}
