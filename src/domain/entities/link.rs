//! Short link entity mapping a code to its redirect target.

use chrono::{DateTime, Utc};

/// A short-code to long-URL mapping.
///
/// Both `code` and `long_url` are immutable once created; there is no update
/// or delete path, which is what makes TTL-based caching of resolutions safe.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "AbC1234".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "AbC1234");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink {
            code: "xyz7890".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "xyz7890");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}
