//! Prompts Module - Template library for AI answer generation.
//!
//! Holds the prompt templates sent to answer providers and the
//! rendering helpers that fill their `{{placeholder}}` slots from
//! profile, resume, and job context.
//!
//! # Components
//!
//! - `PromptKind` - Names each template and picks the default per question category
//! - `format_prompt` - Placeholder substitution with `[key not provided]` fallbacks
//! - `answer_prompt_data` / `eligibility_prompt_data` / `evaluation_prompt_data` /
//!   `adaptation_prompt_data` - Substitution data builders
//!
//! Templates are constants; rendering is pure. Provider calls live in
//! the adapters.

mod render;
mod templates;

pub use render::{
    adaptation_prompt_data, answer_prompt_data, eligibility_prompt_data, evaluation_prompt_data,
    format_prompt, profile_data_text,
};
pub use templates::{
    PromptKind, BEHAVIORAL_QUESTION, CONFIDENCE_EVALUATION, ELIGIBILITY_QUESTION,
    HYBRID_AUTO_APPLY, MEMORY_ADAPTATION, MOTIVATION_QUESTION, TECHNICAL_QUESTION,
};
