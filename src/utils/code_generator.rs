//! Short code generation.
//!
//! Codes double as unguessable identifiers, so candidates are drawn from the
//! operating system CSPRNG rather than a seeded generator.

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 7;

/// The 62-character alphabet codes are drawn from.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// Largest multiple of 62 that fits in a byte; bytes at or above this are
// rejected so the modulo step stays uniform.
const REJECTION_LIMIT: u8 = 62 * 4;

/// Generates a random 7-character alphanumeric short code.
///
/// The candidate is *not* checked for collisions here; callers are expected
/// to verify against the durable store before handing the code out (see
/// [`crate::application::services::LinkService`]).
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LENGTH);

    while code.len() < CODE_LENGTH {
        let mut buffer = [0u8; 16];
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for byte in buffer {
            if byte < REJECTION_LIMIT {
                code.push(ALPHABET[(byte % 62) as usize] as char);
                if code.len() == CODE_LENGTH {
                    break;
                }
            }
        }
    }

    code
}

/// Returns true if `code` has the exact shape of a generated short code.
///
/// Used on the redirect path to reject junk paths before they reach the
/// cache or the database.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
