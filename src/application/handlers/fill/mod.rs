//! Fill handlers
//!
//! Command handlers for answering individual questions and filling
//! every field on the current page.

// Command handlers
mod answer_question;
mod fill_page;

pub use answer_question::{
    AnswerOutcome, AnswerQuestionCommand, AnswerQuestionHandler, AnswerSource, AnsweredQuestion,
    DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use fill_page::{FillPageError, FillPageHandler, FillPageResult, FillTuning};
