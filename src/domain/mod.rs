//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `profile` - Applicant profile, resume facts, and field mapping
//! - `classify` - Keyword routing of form questions into categories
//! - `page` - Form field model, fill planning, and job posting context
//! - `answers` - Answer format checks and truthfulness validation
//! - `memory` - Question fingerprinting and answer recall
//! - `gate` - Submission gating and manual-review rules
//! - `flow` - Button selection, step outcomes, and completion detection
//! - `prompts` - Prompt template library for answer providers

pub mod answers;
pub mod classify;
pub mod flow;
pub mod foundation;
pub mod gate;
pub mod memory;
pub mod page;
pub mod profile;
pub mod prompts;
