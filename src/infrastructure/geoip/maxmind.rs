//! MaxMind GeoLite2 database reader.

use std::net::IpAddr;

use maxminddb::Reader;
use tracing::{info, trace};

use super::resolver::{GeoLocation, GeoResolver};

/// Geo resolver backed by a local GeoLite2-City `.mmdb` file.
///
/// The database is read fully into memory at construction; lookups never
/// perform I/O afterwards.
pub struct MaxMindGeoResolver {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoResolver {
    /// Opens the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`maxminddb::MaxMindDbError`] when the file is
    /// missing or not a valid MaxMind database.
    pub fn open(path: &str) -> Result<Self, maxminddb::MaxMindDbError> {
        let reader = Reader::open_readfile(path)?;
        info!("Loaded GeoIP database from {}", path);
        Ok(Self { reader })
    }
}

impl GeoResolver for MaxMindGeoResolver {
    fn lookup(&self, ip: &str) -> Option<GeoLocation> {
        let ip_addr: IpAddr = ip.parse().ok()?;

        let result = self.reader.lookup(ip_addr).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;

        let country = city.country.iso_code.map(String::from);
        let city_name = city.city.names.english.map(|s| s.to_string());

        trace!(
            "GeoIP lookup for {}: country={:?}, city={:?}",
            ip, country, city_name
        );

        Some(GeoLocation {
            country,
            city: city_name,
        })
    }
}
