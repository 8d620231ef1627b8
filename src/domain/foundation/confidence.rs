//! Confidence value object (0.0-1.0 scale, two decimal places).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A trust score between 0.0 and 1.0 inclusive, rounded to two decimals.
///
/// Produced by the answer validator (one 0.2 penalty per detected issue) and
/// by memory recall (fixed discount for reuse-by-similarity). Not a calibrated
/// probability; "more unverifiable claims" maps to "lower trust".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Zero confidence.
    pub const ZERO: Self = Self(0.0);

    /// Full confidence.
    pub const FULL: Self = Self(1.0);

    /// Creates a new Confidence, clamping to valid range and rounding.
    pub fn new(value: f64) -> Self {
        Self(round_two(value.clamp(0.0, 1.0)))
    }

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("must be within 0.0..=1.0, got {}", value),
            ));
        }
        Ok(Self(round_two(value)))
    }

    /// Derives a confidence from the number of validation issues.
    ///
    /// `max(0, 1 - issue_count * 0.2)`: zero issues scores 1.0, five or more
    /// saturate at 0.0.
    pub fn from_issue_count(issue_count: usize) -> Self {
        let raw = 1.0 - (issue_count as f64) * 0.2;
        Self(round_two(raw.max(0.0)))
    }

    /// Returns the score as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Checks whether this score falls below a review threshold.
    pub fn is_below(&self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_new_clamps_to_range() {
        assert_eq!(Confidence::new(-0.5).value(), 0.0);
        assert_eq!(Confidence::new(1.5).value(), 1.0);
        assert_eq!(Confidence::new(0.75).value(), 0.75);
    }

    #[test]
    fn confidence_new_rounds_to_two_decimals() {
        assert_eq!(Confidence::new(0.666).value(), 0.67);
        assert_eq!(Confidence::new(0.123).value(), 0.12);
    }

    #[test]
    fn confidence_try_new_rejects_out_of_range() {
        assert!(Confidence::try_new(1.01).is_err());
        assert!(Confidence::try_new(-0.01).is_err());
        assert!(Confidence::try_new(0.5).is_ok());
    }

    #[test]
    fn zero_issues_scores_full_confidence() {
        assert_eq!(Confidence::from_issue_count(0), Confidence::FULL);
    }

    #[test]
    fn five_issues_saturate_at_zero() {
        assert_eq!(Confidence::from_issue_count(5), Confidence::ZERO);
        assert_eq!(Confidence::from_issue_count(9), Confidence::ZERO);
    }

    #[test]
    fn each_issue_costs_a_fifth() {
        assert_eq!(Confidence::from_issue_count(1).value(), 0.8);
        assert_eq!(Confidence::from_issue_count(2).value(), 0.6);
        assert_eq!(Confidence::from_issue_count(3).value(), 0.4);
        assert_eq!(Confidence::from_issue_count(4).value(), 0.2);
    }

    #[test]
    fn confidence_is_monotone_in_issue_count() {
        for n in 0..10 {
            let higher = Confidence::from_issue_count(n);
            let lower = Confidence::from_issue_count(n + 1);
            assert!(lower.value() <= higher.value());
        }
    }

    #[test]
    fn is_below_uses_strict_comparison() {
        let c = Confidence::new(0.7);
        assert!(!c.is_below(0.7));
        assert!(c.is_below(0.71));
        assert!(Confidence::new(0.69).is_below(0.7));
    }

    #[test]
    fn confidence_displays_two_decimals() {
        assert_eq!(format!("{}", Confidence::new(0.8)), "0.80");
        assert_eq!(format!("{}", Confidence::ZERO), "0.00");
    }

    #[test]
    fn confidence_serializes_to_json() {
        let c = Confidence::new(0.6);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "0.6");
    }
}
