//! Profile Module - Applicant facts and field mapping.
//!
//! # Components
//!
//! - `ApplicantProfile` - Factual data filled directly into forms
//! - `ResumeFacts` - Parsed resume content used for answer grounding
//! - `profile_fill_key` - Data-driven field-to-profile routing
//! - `is_open_ended` - Detects question fields that need generated answers

mod mapping;
mod profile;
mod resume;

pub use mapping::{is_open_ended, profile_fill_key};
pub use profile::{ApplicantProfile, ProfileKey};
pub use resume::ResumeFacts;
