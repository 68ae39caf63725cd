//! Registration and login against a credential repository

use super::policy::{hash_password, validate_email, validate_password};
use crate::error::{Result, SelectorError};
use crate::storage::{CredentialRepository, UserCredential};

/// Registers and authenticates users
///
/// Every mutation is a whole-store read-modify-write with no locking, which
/// is only safe with a single writer.
pub struct CredentialStore {
    repository: Box<dyn CredentialRepository>,
}

impl CredentialStore {
    pub fn new(repository: Box<dyn CredentialRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user
    ///
    /// Inputs are trimmed. Policy violations are rejected before storage is
    /// touched, and an absent store is treated as empty.
    pub fn register(&self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        let password = password.trim();

        if !validate_email(email) {
            return Err(SelectorError::InvalidEmail(email.to_string()));
        }
        if !validate_password(password) {
            return Err(SelectorError::WeakPassword);
        }

        let mut users = self.repository.load_all()?.unwrap_or_default();
        if users.iter().any(|u| u.email == email) {
            return Err(SelectorError::AlreadyRegistered(email.to_string()));
        }

        users.push(UserCredential {
            email: email.to_string(),
            password_hash: hash_password(password),
        });
        self.repository.save_all(&users)?;

        tracing::info!(email, total_users = users.len(), "User registered");
        Ok(())
    }

    /// Check an email/password pair
    ///
    /// Returns [`SelectorError::NoUserData`] if nobody has ever registered.
    /// Otherwise `false` covers both an unknown email and a wrong password.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        let users = self.repository.load_all()?.ok_or(SelectorError::NoUserData)?;

        let email = email.trim();
        let hashed = hash_password(password.trim());
        let ok = users
            .iter()
            .find(|u| u.email == email)
            .is_some_and(|u| u.password_hash == hashed);

        if ok {
            tracing::info!(email, "Login succeeded");
        } else {
            tracing::debug!("Login rejected");
        }
        Ok(ok)
    }
}
