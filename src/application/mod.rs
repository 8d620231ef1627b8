//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
pub mod session;

pub use handlers::{
    // Fill handlers
    AnswerQuestionCommand, AnswerQuestionHandler, FillPageHandler, FillPageResult,
    // Flow handlers
    EvaluateSubmissionHandler, RunAutoApplyHandler,
    // Memory handlers
    RecordFeedbackCommand, RecordFeedbackHandler,
};
pub use session::{ApplySession, SessionError};
