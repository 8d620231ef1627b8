//! Page Driver Port - Interface to the page being filled.
//!
//! This port is the only doorway between the engine and a live page.
//! A browser adapter talks to the real DOM; tests use a scripted
//! in-memory fixture implementing the same trait.
//!
//! # Contract
//!
//! - `snapshot` re-enumerates the page on every call. Element handles do
//!   not survive navigation, so each flow step takes a fresh snapshot and
//!   never holds field or control ids across steps.
//! - Field labels are derived in order: associated `<label for>`, wrapping
//!   label, `aria-label`, placeholder, then name/id - lowercased and
//!   trimmed.
//! - `FormField::value` for radio and checkbox fields is the selected
//!   value, empty when nothing is selected.
//! - Fields and controls appear in document order.
//! - Fill operations dispatch the page's change notifications (input,
//!   change, blur) so framework-bound forms observe the new value.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct ScriptedDriver { page: PageSnapshot }
//!
//! #[async_trait]
//! impl PageDriver for ScriptedDriver {
//!     async fn snapshot(&self) -> Result<PageSnapshot, PageError> {
//!         Ok(self.page.clone())
//!     }
//!     // ... fill and click operations record into a log
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{ControlId, FieldId};
use crate::domain::page::{ClickMethod, JobSignals, PageSnapshot};

/// Port for reading and mutating the page under automation.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Captures the current page: location, body text, forms with their
    /// fillable fields, and clickable controls.
    async fn snapshot(&self) -> Result<PageSnapshot, PageError>;

    /// Collects raw job posting signals (title, company, and description
    /// candidates) from the current page.
    async fn job_signals(&self) -> Result<JobSignals, PageError>;

    /// Sets the value of a text-like field (text, email, tel, number,
    /// date, password, textarea).
    async fn fill_text(&self, field: FieldId, value: &str) -> Result<(), PageError>;

    /// Selects an option of a dropdown by option value.
    async fn select_option(&self, field: FieldId, value: &str) -> Result<(), PageError>;

    /// Checks the radio input matching the given value within the
    /// field's group.
    async fn choose_radio(&self, field: FieldId, value: &str) -> Result<(), PageError>;

    /// Checks or unchecks a checkbox.
    async fn set_checkbox(&self, field: FieldId, checked: bool) -> Result<(), PageError>;

    /// Attempts one click method on a control. Callers walk
    /// [`ClickMethod::all`] until an attempt succeeds.
    async fn click(&self, control: ControlId, method: ClickMethod) -> Result<(), PageError>;
}

/// Page driver errors.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The field id is not present in the current page.
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// The control id is not present in the current page.
    #[error("control not found: {0}")]
    ControlNotFound(ControlId),

    /// A click attempt was rejected by the page.
    #[error("click via {method} failed: {message}")]
    ClickRejected {
        /// The click method that was attempted.
        method: ClickMethod,
        /// Error details from the page.
        message: String,
    },

    /// The requested operation does not apply to the field's kind.
    #[error("operation not supported for field {field}: {message}")]
    UnsupportedOperation {
        /// Target field.
        field: FieldId,
        /// What was attempted.
        message: String,
    },

    /// The driver lost the page (navigation, closed tab, crashed frame).
    #[error("driver error: {0}")]
    Driver(String),
}

impl PageError {
    /// Creates a click rejection error.
    pub fn click_rejected(method: ClickMethod, message: impl Into<String>) -> Self {
        Self::ClickRejected {
            method,
            message: message.into(),
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(field: FieldId, message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            field,
            message: message.into(),
        }
    }

    /// Creates a driver error.
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_rejection_names_the_method() {
        let err = PageError::click_rejected(ClickMethod::Native, "element detached");
        assert_eq!(
            err.to_string(),
            "click via native click failed: element detached"
        );
    }

    #[test]
    fn field_not_found_includes_the_id() {
        let id = FieldId::new();
        let err = PageError::FieldNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
