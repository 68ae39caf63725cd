//! In-process backends
//!
//! Clones share the same underlying data, so a test can hand one clone to a
//! store and inspect the other.

use super::{CredentialRepository, MetricRow, ResultRepository, UserCredential, entry_name};
use crate::error::{Result, SelectorError};
use std::sync::{Arc, RwLock};

fn lock_error(e: impl std::fmt::Display) -> SelectorError {
    SelectorError::Other(format!("Lock error: {e}"))
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    users: Arc<RwLock<Option<Vec<UserCredential>>>>,
}

impl InMemoryCredentialRepository {
    /// Repository that behaves like a store that was never written
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserCredential>) -> Self {
        Self {
            users: Arc::new(RwLock::new(Some(users))),
        }
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    fn load_all(&self) -> Result<Option<Vec<UserCredential>>> {
        Ok(self.users.read().map_err(lock_error)?.clone())
    }

    fn save_all(&self, users: &[UserCredential]) -> Result<()> {
        *self.users.write().map_err(lock_error)? = Some(users.to_vec());
        Ok(())
    }
}

/// Entries kept in write order; rewriting a key moves it to the end
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultRepository {
    entries: Arc<RwLock<Vec<(String, Vec<MetricRow>)>>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultRepository for InMemoryResultRepository {
    fn write(&self, key: &str, rows: &[MetricRow]) -> Result<()> {
        let name = entry_name(key);
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.retain(|(existing, _)| *existing != name);
        entries.push((name, rows.to_vec()));
        Ok(())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn read(&self, name: &str) -> Result<Vec<MetricRow>> {
        let entries = self.entries.read().map_err(lock_error)?;
        entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| SelectorError::InvalidSelection(name.to_string()))
    }
}
