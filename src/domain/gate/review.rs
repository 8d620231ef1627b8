//! Manual review gate for individual answers.

use crate::domain::classify::{Classification, FieldAction, QuestionCategory};
use crate::domain::foundation::Confidence;

/// Returns true when an answer must be reviewed by the applicant
/// before it can be used.
///
/// Legal attestations and anything classified for manual review block
/// unconditionally; qualitative answers block when their validated
/// confidence falls below the threshold.
pub fn requires_manual_review(
    classification: &Classification,
    confidence: Confidence,
    confidence_threshold: f64,
) -> bool {
    if classification.category == QuestionCategory::LegalAttestation {
        return true;
    }
    if classification.action == FieldAction::ManualReviewRequired {
        return true;
    }
    classification.category == QuestionCategory::Qualitative
        && confidence.is_below(confidence_threshold)
}
