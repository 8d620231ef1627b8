//! Form field model and option matching.

use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerFieldKind;
use crate::domain::foundation::FieldId;

/// Kind of form control a field represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Password,
    TextArea,
    Select,
    Radio,
    Checkbox,
    /// Detected for completeness; never filled by the engine.
    File,
}

impl ControlKind {
    /// Maps an HTML input `type` attribute to a control kind. Select and
    /// textarea elements are identified by tag, not type.
    pub fn from_input_type(input_type: &str) -> Option<ControlKind> {
        match input_type {
            "text" => Some(ControlKind::Text),
            "email" => Some(ControlKind::Email),
            "tel" => Some(ControlKind::Tel),
            "number" => Some(ControlKind::Number),
            "date" => Some(ControlKind::Date),
            "password" => Some(ControlKind::Password),
            "radio" => Some(ControlKind::Radio),
            "checkbox" => Some(ControlKind::Checkbox),
            "file" => Some(ControlKind::File),
            _ => None,
        }
    }

    /// Returns true when the engine can write a value into this kind.
    pub fn is_fillable(&self) -> bool {
        !matches!(self, ControlKind::File)
    }

    /// Returns true for kinds carrying a fixed option list.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            ControlKind::Select | ControlKind::Radio | ControlKind::Checkbox
        )
    }

    /// Returns the answer shape expected for this control.
    pub fn answer_field_kind(&self) -> AnswerFieldKind {
        match self {
            ControlKind::Email => AnswerFieldKind::Email,
            ControlKind::Tel => AnswerFieldKind::Phone,
            _ => AnswerFieldKind::FreeText,
        }
    }
}

/// One selectable option of a select element or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A fillable form field as reported by the page driver.
///
/// `label` follows the driver's derivation chain (associated label,
/// enclosing label, aria-label, placeholder, then name/id) and arrives
/// lowercased and trimmed. `value` is the current content; for radio
/// groups and checkboxes it is empty unless something is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: FieldId,
    pub kind: ControlKind,
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub value: String,
    pub options: Vec<FieldOption>,
}

/// Resolves the value written into a select element.
///
/// Exact matches on option value or label win first, then partial
/// matches on label in either direction; with no match at all the
/// requested value is written directly.
pub fn select_fill_value(options: &[FieldOption], value: &str) -> String {
    let value_str = value.to_lowercase().trim().to_string();

    for option in options {
        if option.value.to_lowercase() == value_str || option.label.to_lowercase() == value_str {
            return option.value.clone();
        }
    }

    for option in options {
        let label_lower = option.label.to_lowercase();
        if label_lower.contains(&value_str) || value_str.contains(&label_lower) {
            return option.value.clone();
        }
    }

    value.to_string()
}

/// Resolves which radio option to check, if any. Only exact value
/// matches count; anything else leaves the group untouched.
pub fn radio_fill_value(options: &[FieldOption], value: &str) -> Option<String> {
    let value_str = value.to_lowercase().trim().to_string();
    options
        .iter()
        .find(|option| option.value.to_lowercase() == value_str)
        .map(|option| option.value.clone())
}

/// Resolves the checked state for a checkbox. Unrecognized values
/// leave the box as it is.
pub fn checkbox_fill_state(value: &str) -> Option<bool> {
    match value.to_lowercase().trim() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
