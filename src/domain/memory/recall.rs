//! Recall of previously stored answers for new questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

use super::entry::StoredAnswer;
use super::similarity::questions_similar;

/// Confidence assigned to answers recalled from memory, below full
/// confidence since the original question differed.
pub const RECALL_CONFIDENCE: f64 = 0.8;

/// An answer recalled from memory for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecalledAnswer {
    pub answer: String,
    pub confidence: Confidence,
}

/// Finds a stored answer reusable for a new question.
///
/// Entries are scanned in store order and the first hit wins. A hit
/// requires reusable feedback and keyword similarity between the new
/// question and the stored answer text; matching against answer text
/// rather than the original question keeps recall working even though
/// entries are keyed by opaque fingerprints.
pub fn find_similar_answer(question: &str, entries: &[StoredAnswer]) -> Option<RecalledAnswer> {
    entries
        .iter()
        .find(|entry| questions_similar(question, &entry.answer) && entry.feedback.is_reusable())
        .map(|entry| RecalledAnswer {
            answer: entry.answer.clone(),
            confidence: Confidence::new(RECALL_CONFIDENCE),
        })
}
