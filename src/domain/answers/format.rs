//! Answer format checks applied before a value is written to a field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Longest answer accepted for free-text fields, in characters.
const MAX_ANSWER_CHARS: usize = 5000;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|e| panic!("Failed to compile email pattern: {e}"))
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\d\-\+\(\)\s]{10,}$")
        .unwrap_or_else(|e| panic!("Failed to compile phone pattern: {e}"))
});

/// Shape expected of an answer, derived from the target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFieldKind {
    Email,
    Phone,
    FreeText,
}

/// Result of a format check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheck {
    pub valid: bool,
    pub reason: String,
}

impl FormatCheck {
    fn ok(reason: &str) -> Self {
        Self {
            valid: true,
            reason: reason.to_string(),
        }
    }

    fn rejected(reason: &str) -> Self {
        Self {
            valid: false,
            reason: reason.to_string(),
        }
    }
}

/// Checks an answer's format against the target field's expected shape.
///
/// Email and phone fields are judged by pattern alone; the length cap
/// applies only to free text.
pub fn validate_answer_format(answer: &str, kind: AnswerFieldKind) -> FormatCheck {
    if answer.trim().is_empty() {
        return FormatCheck::rejected("Answer is empty");
    }

    match kind {
        AnswerFieldKind::Email => {
            if EMAIL_PATTERN.is_match(answer) {
                FormatCheck::ok("Valid email")
            } else {
                FormatCheck::rejected("Invalid email format")
            }
        }
        AnswerFieldKind::Phone => {
            if PHONE_PATTERN.is_match(answer) {
                FormatCheck::ok("Valid phone")
            } else {
                FormatCheck::rejected("Invalid phone format")
            }
        }
        AnswerFieldKind::FreeText => {
            if answer.chars().count() > MAX_ANSWER_CHARS {
                FormatCheck::rejected("Answer is too long")
            } else {
                FormatCheck::ok("Valid answer")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_is_rejected() {
        let check = validate_answer_format("", AnswerFieldKind::FreeText);
        assert!(!check.valid);
        assert_eq!(check.reason, "Answer is empty");
    }

    #[test]
    fn whitespace_only_answer_is_rejected() {
        let check = validate_answer_format("   \n", AnswerFieldKind::Email);
        assert!(!check.valid);
        assert_eq!(check.reason, "Answer is empty");
    }

    #[test]
    fn well_formed_email_passes() {
        let check = validate_answer_format("ada@example.com", AnswerFieldKind::Email);
        assert!(check.valid);
        assert_eq!(check.reason, "Valid email");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let check = validate_answer_format("ada at example", AnswerFieldKind::Email);
        assert!(!check.valid);
        assert_eq!(check.reason, "Invalid email format");
    }

    #[test]
    fn formatted_phone_passes() {
        let check = validate_answer_format("(555) 123-4567", AnswerFieldKind::Phone);
        assert!(check.valid);
        assert_eq!(check.reason, "Valid phone");
    }

    #[test]
    fn short_phone_is_rejected() {
        let check = validate_answer_format("555-1234", AnswerFieldKind::Phone);
        assert!(!check.valid);
        assert_eq!(check.reason, "Invalid phone format");
    }

    #[test]
    fn overlong_free_text_is_rejected() {
        let answer = "a".repeat(MAX_ANSWER_CHARS + 1);
        let check = validate_answer_format(&answer, AnswerFieldKind::FreeText);
        assert!(!check.valid);
        assert_eq!(check.reason, "Answer is too long");
    }

    #[test]
    fn length_cap_does_not_apply_to_email() {
        let answer = format!("{}@example.com", "a".repeat(MAX_ANSWER_CHARS));
        let check = validate_answer_format(&answer, AnswerFieldKind::Email);
        assert!(check.valid);
    }

    #[test]
    fn ordinary_free_text_passes() {
        let check = validate_answer_format("I enjoy systems work.", AnswerFieldKind::FreeText);
        assert!(check.valid);
        assert_eq!(check.reason, "Valid answer");
    }
}
