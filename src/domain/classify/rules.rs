//! Keyword routing tables for question classification.
//!
//! Classification is data-driven: each rule pairs a category with the
//! keywords that route a question into it. Rules are consulted in table
//! order and the first keyword hit wins, so earlier buckets shadow later
//! ones when keywords overlap (e.g. "background check" routes to
//! eligibility, not legal attestation).

use super::classifier::QuestionCategory;

/// Keywords marking a question as answerable directly from profile data.
pub const FACTUAL_KEYWORDS: &[&str] = &[
    "first name",
    "last name",
    "full name",
    "email",
    "phone",
    "mobile",
    "contact",
    "address",
    "city",
    "state",
    "country",
    "zip",
    "postal",
    "linkedin",
    "portfolio",
    "github",
    "resume",
    "cv",
    "upload",
    "file",
    "attachment",
    "location",
    "willing to relocate",
];

/// Keywords marking a legal/eligibility question whose answer must come
/// from stored applicant responses, never from generated text.
pub const ELIGIBILITY_KEYWORDS: &[&str] = &[
    "work authorization",
    "visa",
    "authorized",
    "eligible",
    "citizenship",
    "relocation",
    "background check",
    "clearance",
    "security clearance",
    "sponsorship",
    "legal right",
    "work permit",
    "residency",
    "drug test",
    "require sponsorship",
];

/// Keywords marking a legal attestation that always needs a human.
pub const LEGAL_ATTESTATION_KEYWORDS: &[&str] = &[
    "certify",
    "penalty of law",
    "attest",
    "declare under",
    "background check",
    "consent",
    "acknowledgment",
    "agree to",
    "terms and conditions",
    "policy",
    "legal",
    "liable",
    "truthfulness",
];

/// A single classification rule: a category and the keywords that route
/// a question into it.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub category: QuestionCategory,
    pub keywords: &'static [&'static str],
}

/// Ordered rule table. First match wins; questions matching no rule fall
/// through to [`QuestionCategory::Qualitative`].
pub static CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: QuestionCategory::Factual,
        keywords: FACTUAL_KEYWORDS,
    },
    ClassificationRule {
        category: QuestionCategory::Eligibility,
        keywords: ELIGIBILITY_KEYWORDS,
    },
    ClassificationRule {
        category: QuestionCategory::LegalAttestation,
        keywords: LEGAL_ATTESTATION_KEYWORDS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_covers_three_keyed_categories() {
        let categories: Vec<QuestionCategory> =
            CLASSIFICATION_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                QuestionCategory::Factual,
                QuestionCategory::Eligibility,
                QuestionCategory::LegalAttestation,
            ]
        );
    }

    #[test]
    fn qualitative_has_no_rule_entry() {
        assert!(!CLASSIFICATION_RULES
            .iter()
            .any(|r| r.category == QuestionCategory::Qualitative));
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in CLASSIFICATION_RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "keyword {keyword:?}");
            }
        }
    }

    #[test]
    fn background_check_appears_in_two_buckets() {
        assert!(ELIGIBILITY_KEYWORDS.contains(&"background check"));
        assert!(LEGAL_ATTESTATION_KEYWORDS.contains(&"background check"));
    }
}
