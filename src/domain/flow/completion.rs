//! Submission success detection from page state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::page::PageSnapshot;

/// Body text patterns that indicate a completed submission.
static SUCCESS_BODY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"application.*received",
        r"application.*submitted",
        r"application.*success",
        r"thank.*you",
        r"confirmation",
        r"submitted.*success",
        r"we.*received.*your.*application",
        r"application.*complete",
        r"application.*sent",
        r"submission.*confirmed",
    ]
    .into_iter()
    .map(|pattern| {
        Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("Failed to compile success pattern {pattern:?}: {e}"))
    })
    .collect()
});

/// URL fragments that mark a success page.
const SUCCESS_URL_MARKERS: &[&str] = &[
    "confirmation",
    "success",
    "thank-you",
    "thankyou",
    "submitted",
    "application-received",
    "complete",
];

static CONFIRMATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)thank you|application received|submitted successfully|confirmation")
        .unwrap_or_else(|e| panic!("Failed to compile confirmation pattern: {e}"))
});

/// Decides whether the page shows a completed submission.
///
/// Any of three signals suffices: a success message in the body text, a
/// success marker in the URL, or confirmation wording on a page with no
/// forms left.
pub fn submission_succeeded(snapshot: &PageSnapshot) -> bool {
    let body = snapshot.body_text.to_lowercase();
    let has_success_message = SUCCESS_BODY_PATTERNS.iter().any(|p| p.is_match(&body));

    let url = snapshot.url.to_lowercase();
    let has_success_url = SUCCESS_URL_MARKERS.iter().any(|m| url.contains(m));

    let has_confirmation_text = CONFIRMATION_PATTERN.is_match(&body);

    has_success_message || has_success_url || (has_confirmation_text && snapshot.has_no_forms())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(url: &str, body: &str) -> PageSnapshot {
        PageSnapshot {
            url: url.to_string(),
            body_text: body.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn thank_you_body_signals_success() {
        let snap = snapshot(
            "https://acme.com/jobs/1",
            "Thank YOU for applying to Acme. We will be in touch.",
        );
        assert!(submission_succeeded(&snap));
    }

    #[test]
    fn body_pattern_spans_intervening_words() {
        let snap = snapshot(
            "https://acme.com/jobs/1",
            "Your application has been received by our team.",
        );
        assert!(submission_succeeded(&snap));
    }

    #[test]
    fn success_url_alone_is_enough() {
        let snap = snapshot("https://acme.com/apply/thank-you", "loading...");
        assert!(submission_succeeded(&snap));
    }

    #[test]
    fn neutral_application_page_is_not_success() {
        let snap = snapshot(
            "https://acme.com/jobs/1/apply-now",
            "Tell us about yourself and upload a resume.",
        );
        assert!(!submission_succeeded(&snap));
    }

    #[test]
    fn body_patterns_do_not_cross_lines() {
        let snap = snapshot(
            "https://acme.com/jobs/1",
            "submit your application\nall fields received below",
        );
        assert!(!submission_succeeded(&snap));
    }
}
