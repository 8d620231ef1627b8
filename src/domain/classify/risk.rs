//! Auto-submit risk policy.
//!
//! A filled application may only be submitted without human review when
//! the number of qualitative (AI-answered) questions stays at or below
//! the configured limit. Factual, eligibility, and legal questions never
//! count against the limit; the latter two are gated elsewhere.

use serde::{Deserialize, Serialize};

use super::classifier::{Classification, QuestionCategory};

/// Risk level attached to an auto-submit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionRisk {
    Low,
    Medium,
}

impl SubmissionRisk {
    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionRisk::Low => "Low",
            SubmissionRisk::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for SubmissionRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of the auto-submit check for one batch of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSubmitDecision {
    pub auto_submit: bool,
    pub reason: String,
    pub risk: SubmissionRisk,
}

/// Decides whether a batch of classified questions may auto-submit.
pub struct AutoSubmitPolicy;

impl AutoSubmitPolicy {
    /// Evaluates the auto-submit decision for a batch of classifications.
    ///
    /// Counts qualitative questions only; at or below `qualitative_limit`
    /// the batch may auto-submit at low risk, above it the batch is held
    /// for validation at medium risk.
    pub fn evaluate(
        classifications: &[Classification],
        qualitative_limit: usize,
    ) -> AutoSubmitDecision {
        let qualitative_count = classifications
            .iter()
            .filter(|c| c.category == QuestionCategory::Qualitative)
            .count();

        if qualitative_count <= qualitative_limit {
            AutoSubmitDecision {
                auto_submit: true,
                reason: "Low qualitative question count".to_string(),
                risk: SubmissionRisk::Low,
            }
        } else {
            AutoSubmitDecision {
                auto_submit: false,
                reason: "Multiple qualitative questions require validation".to_string(),
                risk: SubmissionRisk::Medium,
            }
        }
    }
}
