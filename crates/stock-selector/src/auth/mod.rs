//! User accounts
//!
//! [`policy`] holds the pure validation and hashing rules; [`store`] applies
//! them to a [`CredentialRepository`](crate::storage::CredentialRepository).
//!
//! Passwords are stored as unsalted SHA-256 hex digests. Equal passwords
//! produce equal hashes, so the credential file must be treated as sensitive.

pub mod policy;
pub mod store;

pub use policy::{hash_password, validate_email, validate_password};
pub use store::CredentialStore;

/// The part of an email before the first `@`
///
/// Used as the per-user key for saved analyses. Different domains with the
/// same local part share a key.
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("alice@example.com"), "alice");
        assert_eq!(local_part("a.b+c@x.io"), "a.b+c");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
        assert_eq!(local_part("a@b@c.co"), "a");
    }
}
