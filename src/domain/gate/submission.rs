//! Submission gate - final checks before a form may be submitted.

use serde::{Deserialize, Serialize};

/// Form state the gate inspects before allowing submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormGateState {
    /// Labels of required fields still unanswered.
    pub required_unanswered: Vec<String>,
    /// Labels of legal questions the applicant has not approved.
    pub legal_unapproved: Vec<String>,
    /// Labels of answers below the confidence threshold.
    pub low_confidence_answers: Vec<String>,
}

/// Gate verdict with the issues found.
///
/// `blocking_reasons` is the subset of issues that hard-block
/// submission; low-confidence issues are advisory and appear only in
/// `issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDecision {
    pub can_submit: bool,
    pub issues: Vec<String>,
    pub blocking_reasons: Vec<String>,
}

/// Decides whether a filled form may be submitted.
pub struct SubmissionGate;

impl SubmissionGate {
    /// Evaluates the gate against the current form state.
    pub fn evaluate(state: &FormGateState) -> SubmissionDecision {
        let mut issues = Vec::new();

        if !state.required_unanswered.is_empty() {
            issues.push(format!(
                "Missing required fields: {}",
                state.required_unanswered.join(", ")
            ));
        }

        if !state.legal_unapproved.is_empty() {
            issues.push("Legal questions require approval".to_string());
        }

        if !state.low_confidence_answers.is_empty() {
            issues.push(format!(
                "{} low-confidence answer(s) need review",
                state.low_confidence_answers.len()
            ));
        }

        let blocking_reasons = issues
            .iter()
            .filter(|i| {
                i.contains("Missing required") || i.contains("Legal") || i.contains("unapproved")
            })
            .cloned()
            .collect();

        SubmissionDecision {
            can_submit: issues.is_empty(),
            issues,
            blocking_reasons,
        }
    }
}
