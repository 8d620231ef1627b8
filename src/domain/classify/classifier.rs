//! Question classifier - routes form questions into handling categories.

use serde::{Deserialize, Serialize};

use super::rules::CLASSIFICATION_RULES;

/// Category assigned to a form question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    /// Directly answerable from profile data (name, email, phone).
    Factual,
    /// Work authorization, visa, and similar legal eligibility questions.
    Eligibility,
    /// Certifications and attestations that always need a human.
    LegalAttestation,
    /// Open-ended questions requiring reasoning about the applicant.
    Qualitative,
}

impl QuestionCategory {
    /// Returns all categories in classification priority order.
    pub fn all() -> &'static [QuestionCategory] {
        &[
            QuestionCategory::Factual,
            QuestionCategory::Eligibility,
            QuestionCategory::LegalAttestation,
            QuestionCategory::Qualitative,
        ]
    }

    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionCategory::Factual => "Factual",
            QuestionCategory::Eligibility => "Eligibility",
            QuestionCategory::LegalAttestation => "Legal Attestation",
            QuestionCategory::Qualitative => "Qualitative",
        }
    }

    /// Returns the action taken for questions in this category.
    pub fn default_action(&self) -> FieldAction {
        match self {
            QuestionCategory::Factual => FieldAction::AutoFill,
            QuestionCategory::Eligibility => FieldAction::UseStoredOnly,
            QuestionCategory::LegalAttestation => FieldAction::ManualReviewRequired,
            QuestionCategory::Qualitative => FieldAction::AiAnswer,
        }
    }

    /// Returns the canonical reason string recorded for this category.
    pub fn reason(&self) -> &'static str {
        match self {
            QuestionCategory::Factual => "Auto-fillable profile field",
            QuestionCategory::Eligibility => "Legal/eligibility question",
            QuestionCategory::LegalAttestation => "Legal/certification requirement",
            QuestionCategory::Qualitative => "Open-ended question requiring reasoning",
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a classified question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAction {
    /// Fill directly from profile data.
    AutoFill,
    /// Only a previously stored applicant answer may be used.
    UseStoredOnly,
    /// Generate an answer with the configured AI provider.
    AiAnswer,
    /// Leave blank and flag for the applicant.
    ManualReviewRequired,
}

impl FieldAction {
    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldAction::AutoFill => "Auto-fill",
            FieldAction::UseStoredOnly => "Stored answer only",
            FieldAction::AiAnswer => "AI answer",
            FieldAction::ManualReviewRequired => "Manual review required",
        }
    }
}

impl std::fmt::Display for FieldAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of classifying a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: QuestionCategory,
    pub action: FieldAction,
    pub reason: String,
}

impl Classification {
    /// Builds the classification recorded for a category.
    pub fn for_category(category: QuestionCategory) -> Self {
        Self {
            category,
            action: category.default_action(),
            reason: category.reason().to_string(),
        }
    }
}

/// Classifies form questions by keyword routing.
pub struct QuestionClassifier;

impl QuestionClassifier {
    /// Classifies a question from its text and associated label.
    ///
    /// Both inputs are lowercased and concatenated before matching, so a
    /// keyword hit in either is sufficient. Rules are consulted in table
    /// order and the first match wins; anything unmatched is qualitative.
    pub fn classify(question_text: &str, label_text: &str) -> Classification {
        let text = format!(
            "{} {}",
            question_text.to_lowercase(),
            label_text.to_lowercase()
        );

        for rule in CLASSIFICATION_RULES {
            if rule.keywords.iter().any(|keyword| text.contains(keyword)) {
                return Classification::for_category(rule.category);
            }
        }

        Classification::for_category(QuestionCategory::Qualitative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_returns_4_categories() {
        assert_eq!(QuestionCategory::all().len(), 4);
    }

    #[test]
    fn classify_email_question_as_factual() {
        let c = QuestionClassifier::classify("What is your email address?", "");
        assert_eq!(c.category, QuestionCategory::Factual);
        assert_eq!(c.action, FieldAction::AutoFill);
        assert_eq!(c.reason, "Auto-fillable profile field");
    }

    #[test]
    fn classify_visa_question_as_eligibility() {
        let c = QuestionClassifier::classify("Do you require visa sponsorship?", "");
        assert_eq!(c.category, QuestionCategory::Eligibility);
        assert_eq!(c.action, FieldAction::UseStoredOnly);
        assert_eq!(c.reason, "Legal/eligibility question");
    }

    #[test]
    fn classify_certify_question_as_legal_attestation() {
        let c = QuestionClassifier::classify("I certify that the above is accurate", "");
        assert_eq!(c.category, QuestionCategory::LegalAttestation);
        assert_eq!(c.action, FieldAction::ManualReviewRequired);
        assert_eq!(c.reason, "Legal/certification requirement");
    }

    #[test]
    fn classify_open_ended_as_qualitative() {
        let c = QuestionClassifier::classify("Why do you want to work here?", "");
        assert_eq!(c.category, QuestionCategory::Qualitative);
        assert_eq!(c.action, FieldAction::AiAnswer);
        assert_eq!(c.reason, "Open-ended question requiring reasoning");
    }

    #[test]
    fn eligibility_wins_over_legal_for_background_check() {
        // "background check" sits in both keyword buckets; the earlier
        // eligibility rule shadows the legal attestation rule.
        let c = QuestionClassifier::classify("Do you consent to a background check?", "");
        assert_eq!(c.category, QuestionCategory::Eligibility);
    }

    #[test]
    fn factual_wins_when_factual_and_eligibility_both_match() {
        let c = QuestionClassifier::classify("Email address for visa documents", "");
        assert_eq!(c.category, QuestionCategory::Factual);
    }

    #[test]
    fn label_contributes_to_classification() {
        let c = QuestionClassifier::classify("", "phone number");
        assert_eq!(c.category, QuestionCategory::Factual);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let c = QuestionClassifier::classify("DO YOU REQUIRE VISA SPONSORSHIP?", "");
        assert_eq!(c.category, QuestionCategory::Eligibility);
    }

    #[test]
    fn empty_inputs_default_to_qualitative() {
        let c = QuestionClassifier::classify("", "");
        assert_eq!(c.category, QuestionCategory::Qualitative);
    }

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::LegalAttestation).unwrap();
        assert_eq!(json, "\"legal_attestation\"");
        let json = serde_json::to_string(&FieldAction::UseStoredOnly).unwrap();
        assert_eq!(json, "\"use_stored_only\"");
    }

    proptest! {
        #[test]
        fn classify_is_total_and_deterministic(question in ".*", label in ".*") {
            let first = QuestionClassifier::classify(&question, &label);
            let second = QuestionClassifier::classify(&question, &label);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn eligibility_keyword_alone_never_classifies_factual(
            prefix in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
        ) {
            let question = format!("{prefix} sponsorship {suffix}");
            let c = QuestionClassifier::classify(&question, "");
            // Random padding can spell a factual keyword ("cv", "state"),
            // and the factual rule legitimately wins those.
            let lowered = question.to_lowercase();
            let factual_hit = super::super::rules::FACTUAL_KEYWORDS
                .iter()
                .any(|k| lowered.contains(k));
            if !factual_hit {
                prop_assert_eq!(c.category, QuestionCategory::Eligibility);
            }
        }
    }
}
