//! Email, password and hashing rules

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check that the whole string looks like `local@domain.tld`
///
/// The top-level label must be at least two ASCII letters.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check the password strength policy
///
/// At least [`MIN_PASSWORD_LEN`] characters with one ASCII digit and one
/// ASCII letter. No upper bound and no special-character rule.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_alphabetic())
}

/// SHA-256 of the password, as 64 lowercase hex characters
///
/// Unsalted: equal passwords produce equal hashes across users.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
