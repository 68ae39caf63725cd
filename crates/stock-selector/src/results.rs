//! Saved analyses per user

use crate::api::validate_ticker;
use crate::engine::AnalysisResult;
use crate::error::{Result, SelectorError};
use crate::storage::{MetricRow, ResultRepository};

/// One saved analysis as read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResultFile {
    pub name: String,
    pub rows: Vec<MetricRow>,
}

/// Storage key for a user's analysis of `ticker`
///
/// Only the email local part identifies the user, so `alice@x.com` and
/// `alice@y.org` share keys.
pub fn result_key(user_local_id: &str, ticker: &str) -> String {
    format!("{user_local_id}_{ticker}")
}

/// Saves, lists and reads back analyses
pub struct ResultStore {
    repository: Box<dyn ResultRepository>,
}

impl ResultStore {
    pub fn new(repository: Box<dyn ResultRepository>) -> Self {
        Self { repository }
    }

    /// Save `result` for the user, replacing any earlier analysis of `ticker`
    ///
    /// Returns the key written, or `None` when there was nothing to save.
    pub fn save(
        &self,
        result: Option<&AnalysisResult>,
        user_local_id: &str,
        ticker: &str,
    ) -> Result<Option<String>> {
        let Some(result) = result else {
            tracing::warn!(user_local_id, ticker, "No data to save");
            return Ok(None);
        };

        let key = result_key(user_local_id, validate_ticker(ticker)?);
        self.repository.write(&key, &result.to_rows())?;

        tracing::info!(key = %key, "Analysis saved");
        Ok(Some(key))
    }

    /// Names of the user's saved analyses, oldest first
    pub fn list(&self, user_local_id: &str) -> Result<Vec<String>> {
        self.repository.list(&format!("{user_local_id}_"))
    }

    /// Read the analysis at 1-based position `selection` of [`list`](Self::list)
    ///
    /// Nothing is read unless the selection is a number within the listing.
    pub fn read_selection(&self, user_local_id: &str, selection: &str) -> Result<StoredResultFile> {
        let names = self.list(user_local_id)?;
        if names.is_empty() {
            return Err(SelectorError::NoSavedResults);
        }

        let index: usize = selection.trim().parse().map_err(|_| {
            SelectorError::InvalidSelection(format!("{:?} is not a number", selection.trim()))
        })?;
        let name = index
            .checked_sub(1)
            .and_then(|i| names.get(i))
            .ok_or_else(|| {
                SelectorError::InvalidSelection(format!(
                    "{index} is not between 1 and {}",
                    names.len()
                ))
            })?;

        let rows = self.repository.read(name)?;
        Ok(StoredResultFile {
            name: name.clone(),
            rows,
        })
    }
}
