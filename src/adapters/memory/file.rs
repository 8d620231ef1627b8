//! File-based Answer Store Adapter
//!
//! Stores the answer memory as a JSON array at {base_dir}/answers.json.
//! The whole file is rewritten on every update, which is fine at the
//! scale of one applicant's answer history.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::memory::StoredAnswer;
use crate::ports::{AnswerStore, StoreError};

/// One persisted record: the fingerprint key plus the entry fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    fingerprint: String,
    #[serde(flatten)]
    entry: StoredAnswer,
}

/// File-based answer store.
#[derive(Debug, Clone)]
pub struct FileAnswerStore {
    base_dir: PathBuf,
}

impl FileAnswerStore {
    /// Create new file storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn answers_path(&self) -> PathBuf {
        self.base_dir.join("answers.json")
    }

    /// Reads all records, or an empty list when the file does not exist.
    async fn read_records(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let path = self.answers_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::io(format!("Failed to read file: {}", e)))?;

        serde_json::from_str(&json).map_err(|e| StoreError::serialization(e.to_string()))
    }

    /// Writes all records atomically using a temporary file.
    async fn write_records(&self, records: &[StoredRecord]) -> Result<(), StoreError> {
        let path = self.answers_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(format!("Failed to create directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| StoreError::io(format!("Failed to write temporary file: {}", e)))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StoreError::io(format!("Failed to rename file: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AnswerStore for FileAnswerStore {
    async fn get(&self, fingerprint: &str) -> Result<Option<StoredAnswer>, StoreError> {
        let records = self.read_records().await?;
        Ok(records
            .into_iter()
            .find(|r| r.fingerprint == fingerprint)
            .map(|r| r.entry))
    }

    async fn put(&self, fingerprint: &str, entry: StoredAnswer) -> Result<(), StoreError> {
        let mut records = self.read_records().await?;
        match records.iter_mut().find(|r| r.fingerprint == fingerprint) {
            Some(existing) => existing.entry = entry,
            None => records.push(StoredRecord {
                fingerprint: fingerprint.to_string(),
                entry,
            }),
        }
        self.write_records(&records).await
    }

    async fn entries(&self) -> Result<Vec<StoredAnswer>, StoreError> {
        let records = self.read_records().await?;
        Ok(records.into_iter().map(|r| r.entry).collect())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.write_records(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::memory::AnswerFeedback;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAnswerStore::new(temp_dir.path());

        assert!(store.get("fp-1").await.unwrap().is_none());
        assert!(store.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn put_survives_a_fresh_store_instance() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FileAnswerStore::new(temp_dir.path());
            store
                .put(
                    "fp-1",
                    StoredAnswer::new("Ten years of Rust", AnswerFeedback::Accepted),
                )
                .await
                .unwrap();
        }

        let reopened = FileAnswerStore::new(temp_dir.path());
        let found = reopened.get("fp-1").await.unwrap().unwrap();
        assert_eq!(found.answer, "Ten years of Rust");
    }

    #[tokio::test]
    async fn replacement_keeps_the_entry_position() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAnswerStore::new(temp_dir.path());

        store
            .put("fp-1", StoredAnswer::new("first", AnswerFeedback::Accepted))
            .await
            .unwrap();
        store
            .put("fp-2", StoredAnswer::new("second", AnswerFeedback::Accepted))
            .await
            .unwrap();
        store
            .put("fp-1", StoredAnswer::new("updated", AnswerFeedback::Positive))
            .await
            .unwrap();

        let entries = store.entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "updated");
        assert_eq!(entries[1].answer, "second");
    }

    #[tokio::test]
    async fn clear_truncates_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAnswerStore::new(temp_dir.path());

        store
            .put("fp-1", StoredAnswer::new("a", AnswerFeedback::Accepted))
            .await
            .unwrap();
        store.clear().await.unwrap();

        assert!(store.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAnswerStore::new(temp_dir.path());

        tokio::fs::write(temp_dir.path().join("answers.json"), "{ not json")
            .await
            .unwrap();

        let result = store.entries().await;
        assert!(matches!(result, Err(StoreError::Serialization { .. })));
    }
}
