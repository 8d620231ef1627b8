//! Memory Module - Remembering and recalling applicant answers.
//!
//! # Components
//!
//! - `question_fingerprint` - Stable base-36 keys for the answer store
//! - `StoredAnswer` / `AnswerFeedback` - Entries and their reuse eligibility
//! - `find_similar_answer` - Keyword-overlap recall of reusable answers
//!
//! Pure domain logic; persistence lives behind the answer store port.

mod entry;
mod fingerprint;
mod recall;
mod similarity;

pub use entry::{AnswerFeedback, StoredAnswer};
pub use fingerprint::question_fingerprint;
pub use recall::{find_similar_answer, RecalledAnswer, RECALL_CONFIDENCE};
pub use similarity::questions_similar;
