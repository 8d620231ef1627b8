//! Stored answer entries and applicant feedback.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Applicant feedback on a stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFeedback {
    /// Applicant explicitly marked the answer as good.
    Positive,
    /// Answer was submitted without edits.
    Accepted,
    /// Applicant explicitly marked the answer as bad.
    Negative,
    /// Answer was replaced before submission.
    Rejected,
}

impl AnswerFeedback {
    /// Returns true when an answer with this feedback may be reused.
    pub fn is_reusable(&self) -> bool {
        matches!(self, AnswerFeedback::Positive | AnswerFeedback::Accepted)
    }

    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AnswerFeedback::Positive => "Positive",
            AnswerFeedback::Accepted => "Accepted",
            AnswerFeedback::Negative => "Negative",
            AnswerFeedback::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for AnswerFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One remembered answer, keyed in the store by question fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnswer {
    pub answer: String,
    pub feedback: AnswerFeedback,
    pub timestamp: Timestamp,
    pub times_used: u32,
}

impl StoredAnswer {
    /// Records an answer for the first time.
    pub fn new(answer: impl Into<String>, feedback: AnswerFeedback) -> Self {
        Self {
            answer: answer.into(),
            feedback,
            timestamp: Timestamp::now(),
            times_used: 1,
        }
    }

    /// Records an answer over a previous entry for the same question,
    /// carrying the use count forward.
    pub fn recorded_over(
        answer: impl Into<String>,
        feedback: AnswerFeedback,
        previous: Option<&StoredAnswer>,
    ) -> Self {
        Self {
            answer: answer.into(),
            feedback,
            timestamp: Timestamp::now(),
            times_used: previous.map(|p| p.times_used).unwrap_or(0) + 1,
        }
    }
}
