//! Memory handlers
//!
//! Write path to the answer memory; reads happen inside the answer
//! pipeline.

// Command handlers
mod record_feedback;

pub use record_feedback::{
    RecordFeedbackCommand, RecordFeedbackError, RecordFeedbackHandler, RecordFeedbackResult,
};
