//! EvaluateSubmissionHandler - Query handler for the submission verdict.
//!
//! Combines the hard submission gate with the auto-submit risk policy
//! over the results of a fill pass. Purely computational; callers run
//! it before deciding whether to click submit on the applicant's
//! behalf.

use crate::application::handlers::fill::FillPageResult;
use crate::domain::classify::{AutoSubmitDecision, AutoSubmitPolicy};
use crate::domain::gate::{SubmissionDecision, SubmissionGate};

pub const DEFAULT_QUALITATIVE_LIMIT: usize = 1;

/// Query asking whether a filled page may be submitted.
#[derive(Debug, Clone)]
pub struct EvaluateSubmissionQuery {
    /// The fill pass under judgment.
    pub fill: FillPageResult,
}

/// Combined verdict for a fill pass.
#[derive(Debug, Clone)]
pub struct SubmissionVerdict {
    /// Gate verdict over the form's outstanding issues.
    pub decision: SubmissionDecision,
    /// Risk policy over the batch of classified questions.
    pub auto_submit: AutoSubmitDecision,
}

impl SubmissionVerdict {
    /// True when nothing blocks and the risk policy allows auto-submit.
    pub fn clear_to_submit(&self) -> bool {
        self.decision.can_submit && self.auto_submit.auto_submit
    }
}

/// Handler for evaluating whether a fill pass may be submitted.
pub struct EvaluateSubmissionHandler {
    qualitative_limit: usize,
}

impl Default for EvaluateSubmissionHandler {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITATIVE_LIMIT)
    }
}

impl EvaluateSubmissionHandler {
    pub fn new(qualitative_limit: usize) -> Self {
        Self { qualitative_limit }
    }

    pub fn handle(&self, query: EvaluateSubmissionQuery) -> SubmissionVerdict {
        // 1. Hard gate over the form's outstanding issues
        let decision = SubmissionGate::evaluate(&query.fill.gate_state());

        // 2. Risk policy over the classified question batch
        let auto_submit =
            AutoSubmitPolicy::evaluate(&query.fill.classifications, self.qualitative_limit);

        tracing::debug!(
            can_submit = decision.can_submit,
            auto_submit = auto_submit.auto_submit,
            issues = decision.issues.len(),
            "Submission evaluated"
        );

        SubmissionVerdict {
            decision,
            auto_submit,
        }
    }
}
