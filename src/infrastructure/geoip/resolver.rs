//! Geo resolver trait and location type.

/// City-level location info for an IP address.
#[derive(Debug, Clone, Default)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 country code (e.g., "DE", "US").
    pub country: Option<String>,
    /// English city name.
    pub city: Option<String>,
}

/// Resolves an IP address to a coarse location.
///
/// Lookups are pure in-memory reads against a database loaded at startup,
/// so the trait is synchronous and safe to share across tasks. Any failure
/// (unparsable IP, address not in the database) is a `None`, never an error:
/// the enrichment pipeline substitutes defaults and carries on.
pub trait GeoResolver: Send + Sync {
    /// Looks up the location of an IP address given in string form.
    fn lookup(&self, ip: &str) -> Option<GeoLocation>;
}
