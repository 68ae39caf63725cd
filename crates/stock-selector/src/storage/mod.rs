//! Persistence for credentials and saved analyses
//!
//! Both stores are whole-record repositories: credentials are loaded and
//! rewritten as one collection, and each saved analysis is one named set of
//! rows. [`file`] backs them with CSV files, [`memory`] keeps them in process
//! for tests and embedding.

pub mod file;
pub mod memory;

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub use file::{CsvCredentialRepository, CsvResultRepository};
pub use memory::{InMemoryCredentialRepository, InMemoryResultRepository};

/// File extension used for saved analyses
pub const RESULT_EXTENSION: &str = "csv";

/// One registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password_hash: String,
}

/// One `Metric,Value` row of a saved analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
        }
    }
}

/// Storage backend for the credential collection
pub trait CredentialRepository: Send + Sync {
    /// Every stored credential, or `None` when nothing has been stored yet
    fn load_all(&self) -> Result<Option<Vec<UserCredential>>>;

    /// Replace the whole collection
    fn save_all(&self, users: &[UserCredential]) -> Result<()>;
}

/// Storage backend for saved analyses
pub trait ResultRepository: Send + Sync {
    /// Store `rows` under `key`, replacing any previous entry
    fn write(&self, key: &str, rows: &[MetricRow]) -> Result<()>;

    /// Names of entries starting with `prefix`, oldest first
    fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Rows of the entry called `name`, as returned by [`list`](Self::list)
    fn read(&self, name: &str) -> Result<Vec<MetricRow>>;
}

/// Listing name of the entry stored under `key`
pub fn entry_name(key: &str) -> String {
    format!("{key}.{RESULT_EXTENSION}")
}
