//! Navigation button selection.
//!
//! Button choice is data-driven: a pattern table pairs visible-text
//! regexes with priorities. Submit wording outranks step navigation,
//! which outranks anything merely button-shaped. Document order breaks
//! priority ties.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Timestamp;
use crate::domain::page::PageControl;

/// A navigation pattern with its priority (lower wins).
pub struct ButtonPattern {
    pub regex: Regex,
    pub priority: u8,
}

/// Pattern table for next-button selection.
pub static BUTTON_PATTERNS: Lazy<Vec<ButtonPattern>> = Lazy::new(|| {
    [
        (r"(?i)^submit", 1),
        (r"(?i)^send application", 1),
        (r"(?i)^apply now", 1),
        (r"(?i)^submit application", 1),
        (r"(?i)^next", 2),
        (r"(?i)^continue", 2),
        (r"(?i)^proceed", 2),
        (r"(?i)^go (ahead|forward)", 2),
        (r"(?i)button", 3),
    ]
    .into_iter()
    .map(|(pattern, priority)| ButtonPattern {
        regex: Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Failed to compile button pattern {pattern:?}: {e}")),
        priority,
    })
    .collect()
});

/// One recorded click, kept so the same button is not clicked twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickRecord {
    pub text: String,
    pub at: Timestamp,
}

/// History of clicked buttons within one flow run.
///
/// Buttons are matched by visible text; controls with empty text are
/// never considered repeats.
#[derive(Debug, Clone, Default)]
pub struct ClickHistory {
    records: Vec<ClickRecord>,
}

impl ClickHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click on a button with the given visible text.
    pub fn record(&mut self, text: impl Into<String>) {
        self.records.push(ClickRecord {
            text: text.into(),
            at: Timestamp::now(),
        });
    }

    /// Returns true when a button with this text was already clicked.
    pub fn has_clicked(&self, text: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.text == text && !r.text.is_empty())
    }

    /// Forgets all recorded clicks.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Picks the best next-step button from the page's controls.
///
/// Unclickable controls, empty text, and already-clicked buttons are
/// skipped; among the rest the lowest pattern priority wins, with the
/// earliest control keeping ties.
pub fn find_next_button<'a>(
    controls: &'a [PageControl],
    history: &ClickHistory,
) -> Option<&'a PageControl> {
    let mut best: Option<&PageControl> = None;
    let mut best_priority = u8::MAX;

    for control in controls {
        if !control.clickable {
            continue;
        }
        let text = control.text.to_lowercase();
        if text.trim().is_empty() {
            continue;
        }
        if history.has_clicked(&control.text) {
            continue;
        }

        for pattern in BUTTON_PATTERNS.iter() {
            if pattern.regex.is_match(&text) && pattern.priority < best_priority {
                best = Some(control);
                best_priority = pattern.priority;
            }
        }
    }

    best
}

/// Finds the submit button: the first clickable control whose text
/// mentions submit, falling back to the first clickable submit input.
pub fn find_submit_button(controls: &[PageControl]) -> Option<&PageControl> {
    controls
        .iter()
        .find(|c| c.text.to_lowercase().contains("submit") && c.clickable)
        .or_else(|| controls.iter().find(|c| c.is_submit_input && c.clickable))
}

/// Last-resort pick: the first clickable, labeled control that is not
/// a cancel button. Previously clicked buttons are not excluded here.
pub fn find_any_button(controls: &[PageControl]) -> Option<&PageControl> {
    controls.iter().find(|c| {
        c.clickable && !c.text.is_empty() && !c.text.to_lowercase().contains("cancel")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ControlId;

    fn control(text: &str) -> PageControl {
        PageControl {
            id: ControlId::new(),
            text: text.to_string(),
            clickable: true,
            is_submit_input: false,
        }
    }

    fn unclickable(text: &str) -> PageControl {
        PageControl {
            clickable: false,
            ..control(text)
        }
    }

    #[test]
    fn submit_wording_outranks_next() {
        let controls = vec![control("Next"), control("Submit Application")];
        let picked = find_next_button(&controls, &ClickHistory::new());
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Submit Application"));
    }

    #[test]
    fn document_order_breaks_priority_ties() {
        let controls = vec![control("Continue"), control("Next")];
        let picked = find_next_button(&controls, &ClickHistory::new());
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Continue"));
    }

    #[test]
    fn generic_button_text_is_a_last_tier_match() {
        let controls = vec![control("A button here"), control("Proceed")];
        let picked = find_next_button(&controls, &ClickHistory::new());
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Proceed"));
    }

    #[test]
    fn matching_is_anchored_at_text_start() {
        // "Go back" must not match the go-forward pattern, and trailing
        // words after the anchor are fine.
        let controls = vec![control("Go back")];
        assert!(find_next_button(&controls, &ClickHistory::new()).is_none());

        let controls = vec![control("Next step")];
        let picked = find_next_button(&controls, &ClickHistory::new());
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Next step"));
    }

    #[test]
    fn clicked_buttons_are_skipped() {
        let controls = vec![control("Next"), control("Continue")];
        let mut history = ClickHistory::new();
        history.record("Next");
        let picked = find_next_button(&controls, &history);
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Continue"));
    }

    #[test]
    fn unclickable_controls_are_ignored() {
        let controls = vec![unclickable("Submit"), control("Continue")];
        let picked = find_next_button(&controls, &ClickHistory::new());
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Continue"));
    }

    #[test]
    fn no_candidates_yields_none() {
        assert!(find_next_button(&[], &ClickHistory::new()).is_none());
        let controls = vec![control("Learn more")];
        assert!(find_next_button(&controls, &ClickHistory::new()).is_none());
    }

    #[test]
    fn submit_button_found_by_text() {
        let controls = vec![control("Save draft"), control("Submit application")];
        let picked = find_submit_button(&controls);
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Submit application"));
    }

    #[test]
    fn submit_falls_back_to_submit_input() {
        let mut send = control("Send");
        send.is_submit_input = true;
        let controls = vec![control("Preview"), send];
        let picked = find_submit_button(&controls);
        assert_eq!(picked.map(|c| c.text.as_str()), Some("Send"));
    }

    #[test]
    fn any_button_skips_cancel() {
        let controls = vec![control("Cancel"), control("Save and continue later")];
        let picked = find_any_button(&controls);
        assert_eq!(
            picked.map(|c| c.text.as_str()),
            Some("Save and continue later")
        );
    }

    #[test]
    fn click_history_ignores_empty_text() {
        let mut history = ClickHistory::new();
        history.record("");
        assert!(!history.has_clicked(""));
        history.record("Next");
        assert!(history.has_clicked("Next"));
        history.clear();
        assert!(history.is_empty());
    }
}
