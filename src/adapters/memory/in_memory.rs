//! In-Memory Answer Store Adapter
//!
//! Holds the answer memory in insertion order. Useful for testing and
//! for hosts that keep memory per browser session.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::memory::StoredAnswer;
use crate::ports::{AnswerStore, StoreError};

/// In-memory answer store.
///
/// Entries live in a vector so insertion order survives; replacing an
/// entry keeps its position.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnswerStore {
    entries: Arc<RwLock<Vec<(String, StoredAnswer)>>>,
}

impl InMemoryAnswerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl AnswerStore for InMemoryAnswerStore {
    async fn get(&self, fingerprint: &str) -> Result<Option<StoredAnswer>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .find(|(fp, _)| fp == fingerprint)
            .map(|(_, entry)| entry.clone()))
    }

    async fn put(&self, fingerprint: &str, entry: StoredAnswer) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|(fp, _)| fp == fingerprint) {
            Some((_, existing)) => *existing = entry,
            None => entries.push((fingerprint.to_string(), entry)),
        }
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<StoredAnswer>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(|(_, entry)| entry.clone()).collect())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
