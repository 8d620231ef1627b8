//! Page snapshot - what the driver saw when it scanned the page.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ControlId;

use super::field::FormField;

/// A form and its fillable fields, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// The form's element id, or a driver-generated fallback.
    pub id: String,
    pub fields: Vec<FormField>,
}

/// A click candidate found on the page.
///
/// `text` is the visible text after the driver's derivation chain
/// (inner text, aria-label, title, value, then data attributes),
/// trimmed. `clickable` folds in visibility and disabled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    pub id: ControlId,
    pub text: String,
    pub clickable: bool,
    /// True for `input[type="submit"]` elements, which back the submit
    /// button fallback when no control carries submit wording.
    pub is_submit_input: bool,
}

/// Everything the decision engine needs to know about a page, captured
/// in one scan. Controls appear in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub host: String,
    pub body_text: String,
    pub forms: Vec<FormSnapshot>,
    pub controls: Vec<PageControl>,
}

impl PageSnapshot {
    /// Returns true when the page has no forms left to fill.
    pub fn has_no_forms(&self) -> bool {
        self.forms.is_empty()
    }
}

/// A way of activating a control, tried in [`ClickMethod::all`] order
/// until one succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickMethod {
    /// The element's native click.
    Native,
    /// A synthetic bubbling mouse click event.
    SyntheticMouse,
    /// Pointer-down then mouse-down, finishing with a native click.
    PointerSequence,
    /// Focus the element and press Enter.
    KeyboardEnter,
}

impl ClickMethod {
    /// Returns all methods in fallback order.
    pub fn all() -> &'static [ClickMethod] {
        &[
            ClickMethod::Native,
            ClickMethod::SyntheticMouse,
            ClickMethod::PointerSequence,
            ClickMethod::KeyboardEnter,
        ]
    }

    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClickMethod::Native => "native click",
            ClickMethod::SyntheticMouse => "synthetic mouse event",
            ClickMethod::PointerSequence => "pointer sequence",
            ClickMethod::KeyboardEnter => "keyboard enter",
        }
    }
}

impl std::fmt::Display for ClickMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
