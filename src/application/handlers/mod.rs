//! Application handlers
//!
//! Command and query handlers orchestrating the auto-apply use cases.
//! Handlers depend on ports, never on adapters.

pub mod fill;
pub mod flow;
pub mod memory;

pub use fill::{
    AnswerOutcome, AnswerQuestionCommand, AnswerQuestionHandler, AnswerSource, AnsweredQuestion,
    FillPageError, FillPageHandler, FillPageResult, FillTuning, DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use flow::{
    EvaluateSubmissionHandler, EvaluateSubmissionQuery, FlowTuning, RunAutoApplyHandler,
    SubmissionVerdict, DEFAULT_QUALITATIVE_LIMIT,
};
pub use memory::{
    RecordFeedbackCommand, RecordFeedbackError, RecordFeedbackHandler, RecordFeedbackResult,
};
