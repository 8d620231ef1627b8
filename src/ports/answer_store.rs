//! Answer Store Port - Persistence for the answer memory.
//!
//! Entries are keyed by question fingerprint and scanned in insertion
//! order when looking for similar past answers.
//!
//! # Contract
//!
//! - `entries` yields stored answers in insertion order; a `put` to an
//!   existing fingerprint replaces the entry in place, keeping its
//!   position.
//! - The store grows without bound; there is no eviction.
//! - Updates are read-then-write, last-writer-wins. Callers tolerate a
//!   lost update; the memory is an optimization, not a ledger.

use async_trait::async_trait;

use crate::domain::memory::StoredAnswer;

use super::store::StoreError;

/// Port for the answer memory.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Looks up the entry for a question fingerprint.
    async fn get(&self, fingerprint: &str) -> Result<Option<StoredAnswer>, StoreError>;

    /// Inserts or replaces the entry for a question fingerprint.
    async fn put(&self, fingerprint: &str, entry: StoredAnswer) -> Result<(), StoreError>;

    /// Returns all stored entries in insertion order.
    async fn entries(&self) -> Result<Vec<StoredAnswer>, StoreError>;

    /// Removes every entry.
    async fn clear(&self) -> Result<(), StoreError>;
}
