//! Gate Module - Submission and review gating.
//!
//! # Components
//!
//! - `SubmissionGate` - Form-level verdict before submission
//! - `requires_manual_review` - Per-answer review gate

mod review;
mod submission;

pub use review::requires_manual_review;
pub use submission::{FormGateState, SubmissionDecision, SubmissionGate};
