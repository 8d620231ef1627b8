//! Flow handlers
//!
//! The step orchestrator that drives a multi-page application, and the
//! submission verdict computed before clicking submit.

// Command handlers
mod run_auto_apply;

// Query handlers
mod evaluate_submission;

pub use run_auto_apply::{FlowTuning, RunAutoApplyHandler};

pub use evaluate_submission::{
    EvaluateSubmissionHandler, EvaluateSubmissionQuery, SubmissionVerdict,
    DEFAULT_QUALITATIVE_LIMIT,
};
