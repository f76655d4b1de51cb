//! Client IP extraction and privacy-preserving hashing.
//!
//! The raw client IP is consumed only transiently for geo resolution and
//! hashing; it must never be stored or logged.

use sha2::{Digest, Sha256};
use std::net::SocketAddr;

/// Number of hex characters kept from the IP digest.
const IP_HASH_PREFIX_LEN: usize = 16;

/// Extracts the client IP from a raw `X-Forwarded-For` header value, falling
/// back to the peer address of the connection.
///
/// Prefers the first entry of the header (the original client when the
/// service sits behind a reverse proxy); when the header is absent or empty,
/// the TCP peer address is used.
pub fn client_ip(forwarded_for: Option<&str>, peer: &SocketAddr) -> String {
    forwarded_for
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}

/// Derives a one-way, fixed-length hash of an IP address.
///
/// SHA-256 over the IP concatenated with a server-side secret, truncated to
/// 16 hex characters. Deterministic for a given (ip, secret) pair so repeat
/// visitors can be correlated without retaining the address itself.
pub fn hash_ip(ip: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hasher.update(secret.as_bytes());
    let digest = hasher.finalize();

    hex::encode(digest)[..IP_HASH_PREFIX_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "198.51.100.7:44123".parse().unwrap()
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        assert_eq!(client_ip(Some("203.0.113.5"), &peer()), "203.0.113.5");
    }

    #[test]
    fn test_client_ip_takes_first_forwarded_entry() {
        assert_eq!(
            client_ip(Some("203.0.113.5, 10.0.0.1, 10.0.0.2"), &peer()),
            "203.0.113.5"
        );
    }

    #[test]
    fn test_client_ip_falls_back_to_peer_address() {
        assert_eq!(client_ip(None, &peer()), "198.51.100.7");
    }

    #[test]
    fn test_client_ip_ignores_empty_header() {
        assert_eq!(client_ip(Some(""), &peer()), "198.51.100.7");
    }

    #[test]
    fn test_hash_ip_is_deterministic() {
        assert_eq!(
            hash_ip("203.0.113.5", "secret"),
            hash_ip("203.0.113.5", "secret")
        );
    }

    #[test]
    fn test_hash_ip_has_fixed_length() {
        assert_eq!(hash_ip("203.0.113.5", "secret").len(), IP_HASH_PREFIX_LEN);
        assert_eq!(hash_ip("::1", "secret").len(), IP_HASH_PREFIX_LEN);
    }

    #[test]
    fn test_hash_ip_differs_across_ips_and_secrets() {
        assert_ne!(
            hash_ip("203.0.113.5", "secret"),
            hash_ip("203.0.113.6", "secret")
        );
        assert_ne!(
            hash_ip("203.0.113.5", "secret"),
            hash_ip("203.0.113.5", "other")
        );
    }

    #[test]
    fn test_hash_ip_never_contains_raw_ip() {
        let hashed = hash_ip("203.0.113.5", "secret");
        assert!(!hashed.contains("203.0.113.5"));
        assert!(hashed.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
