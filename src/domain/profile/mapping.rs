//! Field mapping - routes detected form fields to profile keys.
//!
//! The mapping is a data-driven pattern table matched against the
//! combined label, name, and placeholder of a field. Table order is
//! priority order; the first pattern hit wins.

use once_cell::sync::Lazy;
use regex::Regex;

use super::profile::{ApplicantProfile, ProfileKey};

/// Ordered pattern table routing field text to profile keys.
static FIELD_MAPPINGS: Lazy<Vec<(Regex, ProfileKey)>> = Lazy::new(|| {
    [
        (r"first[_-]?name", ProfileKey::FirstName),
        (r"last[_-]?name", ProfileKey::LastName),
        (r"full[_-]?name", ProfileKey::FullName),
        (r"email", ProfileKey::Email),
        (r"phone", ProfileKey::Phone),
        (r"mobile", ProfileKey::Phone),
        (r"address", ProfileKey::Address),
        (r"city", ProfileKey::City),
        (r"state", ProfileKey::State),
        (r"zip|postal", ProfileKey::ZipCode),
        (r"country", ProfileKey::Country),
        (r"linkedin", ProfileKey::Linkedin),
        (r"portfolio", ProfileKey::Portfolio),
        (r"github", ProfileKey::Github),
        (r"website", ProfileKey::Website),
    ]
    .into_iter()
    .map(|(pattern, key)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Failed to compile field pattern {pattern:?}: {e}"));
        (regex, key)
    })
    .collect()
});

/// Markers identifying an open-ended question by its label.
const OPEN_ENDED_MARKERS: &[&str] = &[
    "why",
    "tell us",
    "describe",
    "explain",
    "experience",
    "skill",
    "accomplishment",
    "achievement",
    "motivat",
    "interest",
    "question",
    "comment",
    "additional",
];

/// Resolves the profile key a field should be filled from.
///
/// The label, name, and placeholder are concatenated and lowercased,
/// then the pattern table is consulted in order. An entry only wins
/// when its pattern matches AND the profile has a stored value for the
/// key; otherwise later entries still get a chance.
pub fn profile_fill_key(
    profile: &ApplicantProfile,
    label: &str,
    name: &str,
    placeholder: &str,
) -> Option<ProfileKey> {
    let field_text = format!("{label} {name} {placeholder}").to_lowercase();
    FIELD_MAPPINGS
        .iter()
        .find(|(pattern, key)| {
            pattern.is_match(&field_text) && !profile.stored_value(*key).is_empty()
        })
        .map(|(_, key)| *key)
}

/// Returns true when a field label reads as an open-ended question
/// rather than a profile fact.
pub fn is_open_ended(label: &str) -> bool {
    let lowered = label.to_lowercase();
    OPEN_ENDED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
