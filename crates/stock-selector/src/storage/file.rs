//! CSV file backends

use super::{
    CredentialRepository, MetricRow, RESULT_EXTENSION, ResultRepository, UserCredential,
    entry_name,
};
use crate::error::{Result, SelectorError};
use csv::{Reader, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

const CREDENTIAL_HEADERS: [&str; 2] = ["Email", "Password"];
const METRIC_HEADERS: [&str; 2] = ["Metric", "Value"];

/// Credentials kept in a single `Email,Password` CSV file
#[derive(Debug, Clone)]
pub struct CsvCredentialRepository {
    path: PathBuf,
}

impl CsvCredentialRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialRepository for CsvCredentialRepository {
    fn load_all(&self) -> Result<Option<Vec<UserCredential>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        read_records(&self.path).map(Some)
    }

    fn save_all(&self, users: &[UserCredential]) -> Result<()> {
        write_records_atomic(&self.path, &CREDENTIAL_HEADERS, users)?;
        tracing::debug!(path = %self.path.display(), users = users.len(), "Credential file rewritten");
        Ok(())
    }
}

/// Saved analyses kept as one `Metric,Value` CSV file each under a directory
#[derive(Debug, Clone)]
pub struct CsvResultRepository {
    dir: PathBuf,
}

impl CsvResultRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResultRepository for CsvResultRepository {
    fn write(&self, key: &str, rows: &[MetricRow]) -> Result<()> {
        let path = self.dir.join(entry_name(key));
        write_records_atomic(&path, &METRIC_HEADERS, rows)?;
        tracing::debug!(path = %path.display(), "Result file written");
        Ok(())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let suffix = format!(".{RESULT_EXTENSION}");
        let mut found: Vec<(Option<SystemTime>, String)> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !name.starts_with(prefix) || !name.ends_with(&suffix) {
                continue;
            }
            let metadata = entry.metadata()?;
            let stamp = metadata.created().or_else(|_| metadata.modified()).ok();
            found.push((stamp, name));
        }

        found.sort();
        Ok(found.into_iter().map(|(_, name)| name).collect())
    }

    fn read(&self, name: &str) -> Result<Vec<MetricRow>> {
        if name.contains(['/', '\\']) {
            return Err(SelectorError::InvalidSelection(name.to_string()));
        }
        read_records(&self.dir.join(name))
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = Reader::from_path(path)?;
    let records = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}

/// Write `records` to a temp file beside `path`, then rename it into place
///
/// Readers see either the previous file or the complete new one.
fn write_records_atomic<T: Serialize>(path: &Path, headers: &[&str], records: &[T]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut tmp);
        writer.write_record(headers)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| SelectorError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn user(email: &str) -> UserCredential {
        UserCredential {
            email: email.to_string(),
            password_hash: format!("hash-of-{email}"),
        }
    }

    #[test]
    fn test_missing_credential_file_is_absent() {
        let dir = tempdir().unwrap();
        let repo = CsvCredentialRepository::new(dir.path().join("users.csv"));
        assert_eq!(repo.load_all().unwrap(), None);
    }

    #[test]
    fn test_credentials_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("users.csv");
        let repo = CsvCredentialRepository::new(&path);

        let users = vec![user("a@b.co"), user("c@d.org")];
        repo.save_all(&users).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Email,Password\n"));
        assert!(content.contains("a@b.co,hash-of-a@b.co"));

        assert_eq!(repo.load_all().unwrap(), Some(users));
    }

    #[test]
    fn test_empty_credential_file_is_present() {
        let dir = tempdir().unwrap();
        let repo = CsvCredentialRepository::new(dir.path().join("users.csv"));

        repo.save_all(&[]).unwrap();
        assert_eq!(repo.load_all().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_result_write_overwrites() {
        let dir = tempdir().unwrap();
        let repo = CsvResultRepository::new(dir.path().join("stock_data"));

        repo.write("alice_AAPL", &[MetricRow::new("Average Price", "1.00")])
            .unwrap();
        repo.write("alice_AAPL", &[MetricRow::new("Average Price", "2.00")])
            .unwrap();

        let content = fs::read_to_string(dir.path().join("stock_data/alice_AAPL.csv")).unwrap();
        assert_eq!(content, "Metric,Value\nAverage Price,2.00\n");

        let rows = repo.read("alice_AAPL.csv").unwrap();
        assert_eq!(rows, vec![MetricRow::new("Average Price", "2.00")]);
    }

    #[test]
    fn test_result_list_filters_by_prefix() {
        let dir = tempdir().unwrap();
        let repo = CsvResultRepository::new(dir.path());
        let rows = [MetricRow::new("Lowest Price", "9.50")];

        repo.write("alice_AAPL", &rows).unwrap();
        repo.write("alice_MSFT", &rows).unwrap();
        repo.write("alicia_TSLA", &rows).unwrap();
        repo.write("bob_AAPL", &rows).unwrap();
        fs::write(dir.path().join("alice_notes.txt"), "ignored").unwrap();

        let mut names = repo.list("alice_").unwrap();
        names.sort();
        assert_eq!(names, vec!["alice_AAPL.csv", "alice_MSFT.csv"]);
    }

    #[test]
    fn test_result_list_in_creation_order() {
        let dir = tempdir().unwrap();
        let repo = CsvResultRepository::new(dir.path());
        let rows = [MetricRow::new("Average Price", "1.00")];

        // File timestamps are only as fine as the filesystem clock
        let pause = || std::thread::sleep(std::time::Duration::from_millis(20));
        for key in ["alice_ZZZ", "alice_MMM", "alice_AAA"] {
            repo.write(key, &rows).unwrap();
            pause();
        }
        assert_eq!(
            repo.list("alice_").unwrap(),
            vec!["alice_ZZZ.csv", "alice_MMM.csv", "alice_AAA.csv"]
        );

        // Rewriting replaces the file, so it lists as the newest
        repo.write("alice_ZZZ", &[MetricRow::new("Average Price", "2.00")])
            .unwrap();
        assert_eq!(
            repo.list("alice_").unwrap(),
            vec!["alice_MMM.csv", "alice_AAA.csv", "alice_ZZZ.csv"]
        );
    }

    #[test]
    fn test_result_list_missing_dir() {
        let dir = tempdir().unwrap();
        let repo = CsvResultRepository::new(dir.path().join("never-created"));
        assert!(repo.list("alice_").unwrap().is_empty());
    }

    #[test]
    fn test_result_read_rejects_paths() {
        let dir = tempdir().unwrap();
        let repo = CsvResultRepository::new(dir.path());
        assert!(matches!(
            repo.read("../users.csv"),
            Err(SelectorError::InvalidSelection(_))
        ));
    }
}
