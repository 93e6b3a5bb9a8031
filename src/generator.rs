//! Policy-driven random password generation.
//!
//! Passwords are drawn from the printable ASCII range and accepted only
//! when they contain at least one digit, one uppercase and one
//! lowercase letter.  Rejection sampling keeps the distribution uniform
//! over the accepted set; a rejected draw simply loops and never
//! surfaces to the caller.

use rand::rngs::OsRng;
use rand::Rng;

/// Length of generated passwords.
pub const GENERATED_LEN: usize = 16;

/// First character of the charset (`!`).
const CHARSET_START: u8 = 0x21;

/// Last character of the charset (`~`).
const CHARSET_END: u8 = 0x7e;

/// Generate a password satisfying the default policy.
///
/// Always returns a 16-character printable-ASCII string with at least
/// one digit, one uppercase and one lowercase letter.
pub fn generate_password() -> String {
    loop {
        let candidate: Vec<u8> = (0..GENERATED_LEN)
            .map(|_| OsRng.gen_range(CHARSET_START..=CHARSET_END))
            .collect();

        if satisfies_policy(&candidate) {
            return candidate.iter().map(|&b| b as char).collect();
        }
    }
}

fn satisfies_policy(candidate: &[u8]) -> bool {
    candidate.iter().any(u8::is_ascii_digit)
        && candidate.iter().any(u8::is_ascii_uppercase)
        && candidate.iter().any(u8::is_ascii_lowercase)
}
