//! Classify Module - Keyword routing of form questions.
//!
//! Pure domain services that decide how each detected question is
//! handled before any answer is produced.
//!
//! # Components
//!
//! - `QuestionClassifier` - Routes question text into a category via the rule table
//! - `AutoSubmitPolicy` - Holds batches with too many AI-answered questions
//! - `CLASSIFICATION_RULES` - Ordered keyword table driving the classifier
//!
//! All functions are pure and stateless; no ports or adapters involved.

mod classifier;
mod risk;
mod rules;

pub use classifier::{Classification, FieldAction, QuestionCategory, QuestionClassifier};
pub use risk::{AutoSubmitDecision, AutoSubmitPolicy, SubmissionRisk};
pub use rules::{
    ClassificationRule, CLASSIFICATION_RULES, ELIGIBILITY_KEYWORDS, FACTUAL_KEYWORDS,
    LEGAL_ATTESTATION_KEYWORDS,
};
