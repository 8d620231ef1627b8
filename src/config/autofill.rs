//! Autofill behavior configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Autofill behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AutofillConfig {
    /// Upper bound on fill-and-navigate steps per application
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,

    /// Confidence below which generated answers are held for review
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Qualitative question count above which auto-submit is held
    #[serde(default = "default_qualitative_limit")]
    pub qualitative_question_limit: usize,

    /// Overwrite fields that already hold a value
    #[serde(default)]
    pub overwrite_existing: bool,

    /// Pause after filling, before looking for navigation (milliseconds)
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Pause after a click, while the page transitions (milliseconds)
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,

    /// Pause between consecutive provider calls (milliseconds)
    #[serde(default = "default_answer_pacing_ms")]
    pub answer_pacing_ms: u64,
}

impl AutofillConfig {
    /// Get settle delay as Duration
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Get transition delay as Duration
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Get answer pacing as Duration
    pub fn answer_pacing(&self) -> Duration {
        Duration::from_millis(self.answer_pacing_ms)
    }

    /// Validate autofill configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_steps == 0 {
            return Err(ValidationError::InvalidStepLimit);
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ValidationError::InvalidConfidenceThreshold);
        }

        Ok(())
    }
}

impl Default for AutofillConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            confidence_threshold: default_confidence_threshold(),
            qualitative_question_limit: default_qualitative_limit(),
            overwrite_existing: false,
            settle_delay_ms: default_settle_delay_ms(),
            transition_delay_ms: default_transition_delay_ms(),
            answer_pacing_ms: default_answer_pacing_ms(),
        }
    }
}

fn default_max_steps() -> u32 {
    10
}

fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_qualitative_limit() -> usize {
    1
}

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_transition_delay_ms() -> u64 {
    2000
}

fn default_answer_pacing_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autofill_defaults() {
        let config = AutofillConfig::default();
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.confidence_threshold, 0.7);
        assert_eq!(config.qualitative_question_limit, 1);
        assert!(!config.overwrite_existing);
        assert_eq!(config.settle_delay_ms, 1000);
        assert_eq!(config.transition_delay_ms, 2000);
        assert_eq!(config.answer_pacing_ms, 500);
    }

    #[test]
    fn test_delay_durations() {
        let config = AutofillConfig::default();
        assert_eq!(config.settle_delay(), Duration::from_millis(1000));
        assert_eq!(config.transition_delay(), Duration::from_millis(2000));
        assert_eq!(config.answer_pacing(), Duration::from_millis(500));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AutofillConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let config = AutofillConfig {
            max_steps: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStepLimit)
        ));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = AutofillConfig {
            confidence_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConfidenceThreshold)
        ));

        let config = AutofillConfig {
            confidence_threshold: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
