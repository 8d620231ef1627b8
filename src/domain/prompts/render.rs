//! Prompt rendering - placeholder substitution and data assembly.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::page::JobContext;
use crate::domain::profile::{ApplicantProfile, ProfileKey, ResumeFacts};

/// Matches `{{placeholder}}` slots in a template.
static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([^}]+)\}\}")
        .unwrap_or_else(|e| panic!("Failed to compile placeholder pattern: {e}"))
});

/// Renders a template by substituting `{{key}}` slots from `data`.
///
/// Keys are trimmed before lookup. A slot with no usable value (missing
/// key or empty string) renders as `[key not provided]`.
pub fn format_prompt(template: &str, data: &HashMap<String, String>) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            let key = &caps[1];
            match data.get(key.trim()) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => format!("[{key} not provided]"),
            }
        })
        .into_owned()
}

/// Builds the substitution data shared by the answer-generation
/// templates (hybrid, behavioral, motivation, technical).
pub fn answer_prompt_data(
    question: &str,
    resume: &ResumeFacts,
    job: &JobContext,
) -> HashMap<String, String> {
    HashMap::from([
        ("resume_summary".to_string(), resume.summary_text()),
        ("skills".to_string(), resume.skills_joined()),
        (
            "experience_years".to_string(),
            resume.experience_years_text(),
        ),
        (
            "experience_highlights".to_string(),
            resume.highlights_joined(),
        ),
        ("company_name".to_string(), job.company.clone()),
        ("role".to_string(), job.title.clone()),
        ("job_description".to_string(), job.description.clone()),
        ("question".to_string(), question.to_string()),
    ])
}

/// Builds the substitution data for the eligibility template.
pub fn eligibility_prompt_data(
    question: &str,
    profile: &ApplicantProfile,
) -> HashMap<String, String> {
    HashMap::from([
        ("profile_data".to_string(), profile_data_text(profile)),
        ("question".to_string(), question.to_string()),
    ])
}

/// Builds the substitution data for the confidence-evaluation template.
pub fn evaluation_prompt_data(
    question: &str,
    answer: &str,
    resume: &ResumeFacts,
) -> HashMap<String, String> {
    HashMap::from([
        ("resume_summary".to_string(), resume.summary_text()),
        ("question".to_string(), question.to_string()),
        ("answer".to_string(), answer.to_string()),
    ])
}

/// Builds the substitution data for the memory-adaptation template.
pub fn adaptation_prompt_data(
    original_question: &str,
    original_answer: &str,
    new_question: &str,
) -> HashMap<String, String> {
    HashMap::from([
        (
            "original_question".to_string(),
            original_question.to_string(),
        ),
        ("original_answer".to_string(), original_answer.to_string()),
        ("new_question".to_string(), new_question.to_string()),
    ])
}

/// Renders the stored profile as `field: value` lines. Empty fields are
/// omitted.
pub fn profile_data_text(profile: &ApplicantProfile) -> String {
    ProfileKey::all()
        .iter()
        .filter_map(|key| {
            let value = profile.stored_value(*key);
            if value.is_empty() {
                None
            } else {
                Some(format!("{}: {}", key.field_name(), value))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
