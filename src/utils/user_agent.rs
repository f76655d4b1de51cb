//! User-agent parsing via woothee.

use woothee::parser::Parser;

/// Parsed user-agent attributes. Fields are empty strings when the string
/// could not be classified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAgentInfo {
    pub os: String,
    pub device: String,
    pub browser: String,
}

/// Parses a raw user-agent string into OS, device class, and browser name.
///
/// Unrecognized or empty input yields [`UserAgentInfo::default`] rather than
/// an error; the analytics pipeline records what it can and moves on.
pub fn parse_user_agent(ua: &str) -> UserAgentInfo {
    if ua.is_empty() {
        return UserAgentInfo::default();
    }

    let parser = Parser::new();
    match parser.parse(ua) {
        Some(result) => UserAgentInfo {
            os: known_or_empty(result.os),
            device: known_or_empty(&result.category),
            browser: known_or_empty(result.name),
        },
        None => UserAgentInfo::default(),
    }
}

// woothee reports unclassified fields as the literal "UNKNOWN".
fn known_or_empty(value: &str) -> String {
    if value == "UNKNOWN" {
        String::new()
    } else {
        value.to_string()
    }
}
