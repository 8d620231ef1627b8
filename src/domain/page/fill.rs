//! Fill planning - deciding where each field's value comes from.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{is_open_ended, profile_fill_key, ApplicantProfile, ProfileKey};

use super::field::{ControlKind, FormField};

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillSource {
    /// Filled directly from a profile field.
    Profile(ProfileKey),
    /// Open-ended question answered through the answer pipeline.
    Ai,
    /// Full name derived from first and last name.
    DerivedFullName,
    /// No source could be determined; the field is skipped.
    Unknown,
}

/// Plans the fill source for one field.
///
/// Profile mapping is consulted first, so a label that happens to
/// contain an open-ended marker ("state", "experience") still fills
/// from the profile when a mapping entry applies. Textareas route to
/// the answer pipeline whatever their label says.
pub fn plan_field_fill(field: &FormField, profile: &ApplicantProfile) -> FillSource {
    if !field.kind.is_fillable() {
        return FillSource::Unknown;
    }

    if let Some(key) = profile_fill_key(profile, &field.label, &field.name, &field.placeholder) {
        return FillSource::Profile(key);
    }

    if field.kind == ControlKind::TextArea || is_open_ended(&field.label) {
        return FillSource::Ai;
    }

    let label = field.label.to_lowercase();
    if label.contains("full")
        && label.contains("name")
        && !profile.first_name.is_empty()
        && !profile.last_name.is_empty()
    {
        return FillSource::DerivedFullName;
    }

    FillSource::Unknown
}

/// Joins the non-empty name parts for a derived full name.
pub fn derived_full_name(profile: &ApplicantProfile) -> Option<String> {
    let parts: Vec<&str> = [profile.first_name.as_str(), profile.last_name.as_str()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Returns true when a field already holds a value and overwriting is
/// disabled.
pub fn should_skip_prefilled(field: &FormField, overwrite: bool) -> bool {
    !field.value.is_empty() && !overwrite
}

/// A field that was filled during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledField {
    pub name: String,
    pub kind: ControlKind,
    pub value: String,
}

/// A field that was skipped during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedField {
    pub name: String,
    pub kind: ControlKind,
    pub reason: String,
}

/// Per-form outcome of a fill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFillReport {
    pub form_id: String,
    pub filled: Vec<FilledField>,
    pub skipped: Vec<SkippedField>,
}

impl FormFillReport {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            filled: Vec::new(),
            skipped: Vec::new(),
        }
    }
}
