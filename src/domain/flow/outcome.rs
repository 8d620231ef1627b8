//! Flow outcome reported after an auto-apply run.

use serde::{Deserialize, Serialize};

/// Terminal result of an auto-apply flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowOutcome {
    pub success: bool,
    pub message: String,
    /// Step count at termination, when the flow got far enough to count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

impl FlowOutcome {
    /// A successful outcome without a step count.
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            steps: None,
        }
    }

    /// A failed outcome without a step count.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            steps: None,
        }
    }

    /// Attaches the step count at which the flow ended.
    pub fn at_step(mut self, step: u32) -> Self {
        self.steps = Some(step);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_carries_step_count() {
        let outcome = FlowOutcome::failed("Failed to click next button").at_step(3);
        assert!(!outcome.success);
        assert_eq!(outcome.steps, Some(3));
    }

    #[test]
    fn step_count_is_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&FlowOutcome::succeeded("done")).unwrap();
        assert!(!json.contains("steps"));
    }
}
