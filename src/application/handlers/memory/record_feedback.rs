//! RecordFeedbackHandler - Command handler for applicant answer feedback.
//!
//! Writes the applicant's verdict on an answer into the memory, keyed
//! by question fingerprint. Unlike memory reads, a failed write is a
//! real error: silently dropping feedback would let a rejected answer
//! keep being reused.

use std::sync::Arc;

use crate::domain::memory::{question_fingerprint, AnswerFeedback, StoredAnswer};
use crate::ports::{AnswerStore, StoreError};

/// Command to record feedback on an answer.
#[derive(Debug, Clone)]
pub struct RecordFeedbackCommand {
    /// The question the answer was given for.
    pub question: String,
    /// The answer as the applicant approved or rejected it.
    pub answer: String,
    pub feedback: AnswerFeedback,
}

/// Result of recording feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFeedbackResult {
    /// Fingerprint the entry is stored under.
    pub fingerprint: String,
    /// Use count carried forward from any previous entry.
    pub times_used: u32,
}

/// Error type for feedback recording.
#[derive(Debug)]
pub enum RecordFeedbackError {
    /// The memory store rejected the read or write.
    Store(StoreError),
}

impl std::fmt::Display for RecordFeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFeedbackError::Store(err) => write!(f, "Answer store failed: {}", err),
        }
    }
}

impl std::error::Error for RecordFeedbackError {}

impl From<StoreError> for RecordFeedbackError {
    fn from(err: StoreError) -> Self {
        RecordFeedbackError::Store(err)
    }
}

/// Handler for recording applicant feedback on an answer.
pub struct RecordFeedbackHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl RecordFeedbackHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        command: RecordFeedbackCommand,
    ) -> Result<RecordFeedbackResult, RecordFeedbackError> {
        // 1. Key the entry by question fingerprint
        let fingerprint = question_fingerprint(&command.question);

        // 2. Carry the use count forward over any previous entry
        let previous = self.answer_store.get(&fingerprint).await?;
        let entry = StoredAnswer::recorded_over(command.answer, command.feedback, previous.as_ref());
        let times_used = entry.times_used;

        // 3. Write the new entry in place
        self.answer_store.put(&fingerprint, entry).await?;

        tracing::info!(
            fingerprint = %fingerprint,
            feedback = %command.feedback,
            times_used,
            "Answer feedback recorded"
        );

        Ok(RecordFeedbackResult {
            fingerprint,
            times_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::adapters::memory::InMemoryAnswerStore;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    /// Store whose writes always fail.
    struct BrokenAnswerStore;

    #[async_trait]
    impl AnswerStore for BrokenAnswerStore {
        async fn get(&self, _fingerprint: &str) -> Result<Option<StoredAnswer>, StoreError> {
            Ok(None)
        }

        async fn put(&self, _fingerprint: &str, _entry: StoredAnswer) -> Result<(), StoreError> {
            Err(StoreError::Io {
                message: "disk full".to_string(),
            })
        }

        async fn entries(&self) -> Result<Vec<StoredAnswer>, StoreError> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Test Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn command(feedback: AnswerFeedback) -> RecordFeedbackCommand {
        RecordFeedbackCommand {
            question: "Why do you want to work here?".to_string(),
            answer: "I want to build tools people rely on.".to_string(),
            feedback,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn records_a_first_time_answer() {
        let store = Arc::new(InMemoryAnswerStore::new());
        let handler = RecordFeedbackHandler::new(store.clone());

        let result = handler.handle(command(AnswerFeedback::Accepted)).await.unwrap();

        assert_eq!(result.times_used, 1);
        let stored = store.get(&result.fingerprint).await.unwrap().unwrap();
        assert_eq!(stored.answer, "I want to build tools people rely on.");
        assert_eq!(stored.feedback, AnswerFeedback::Accepted);
    }

    #[tokio::test]
    async fn repeated_feedback_carries_the_use_count_forward() {
        let store = Arc::new(InMemoryAnswerStore::new());
        let handler = RecordFeedbackHandler::new(store.clone());

        handler.handle(command(AnswerFeedback::Accepted)).await.unwrap();
        let result = handler.handle(command(AnswerFeedback::Positive)).await.unwrap();

        assert_eq!(result.times_used, 2);
        let stored = store.get(&result.fingerprint).await.unwrap().unwrap();
        assert_eq!(stored.feedback, AnswerFeedback::Positive);
    }

    #[tokio::test]
    async fn rejection_replaces_the_stored_entry() {
        let store = Arc::new(InMemoryAnswerStore::new());
        let handler = RecordFeedbackHandler::new(store.clone());

        handler.handle(command(AnswerFeedback::Accepted)).await.unwrap();
        let result = handler.handle(command(AnswerFeedback::Rejected)).await.unwrap();

        let stored = store.get(&result.fingerprint).await.unwrap().unwrap();
        assert!(!stored.feedback.is_reusable());
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let handler = RecordFeedbackHandler::new(Arc::new(BrokenAnswerStore));

        let err = handler
            .handle(command(AnswerFeedback::Accepted))
            .await
            .unwrap_err();

        assert!(matches!(err, RecordFeedbackError::Store(StoreError::Io { .. })));
        assert_eq!(err.to_string(), "Answer store failed: storage io error: disk full");
    }

    #[tokio::test]
    async fn distinct_questions_get_distinct_fingerprints() {
        let store = Arc::new(InMemoryAnswerStore::new());
        let handler = RecordFeedbackHandler::new(store.clone());

        let first = handler.handle(command(AnswerFeedback::Accepted)).await.unwrap();
        let second = handler
            .handle(RecordFeedbackCommand {
                question: "What interests you about this role?".to_string(),
                answer: "The product space.".to_string(),
                feedback: AnswerFeedback::Accepted,
            })
            .await
            .unwrap();

        assert_ne!(first.fingerprint, second.fingerprint);
        assert_eq!(store.entries().await.unwrap().len(), 2);
    }
}
