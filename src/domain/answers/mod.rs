//! Answers Module - Validation of generated answers.
//!
//! # Components
//!
//! - `ConfidenceValidator` - Cross-checks answers against resume facts
//! - `validate_answer_format` - Shape checks before a value is written

mod format;
mod validator;

pub use format::{validate_answer_format, AnswerFieldKind, FormatCheck};
pub use validator::{AnswerReview, ConfidenceValidator};
