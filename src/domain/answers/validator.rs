//! Confidence validator - cross-checks generated answers against resume facts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;
use crate::domain::profile::ResumeFacts;

/// Superlatives that mark a skill claim as strong enough to verify.
const SUPERLATIVES: &[&str] = &["expert", "master", "proficient", "advanced", "guru"];

/// Skill names the validator knows how to spot in answer text.
const COMMON_SKILLS: &[&str] = &["python", "java", "javascript", "react", "node", "sql", "aws"];

/// Years of claimed experience may exceed the resume by this much.
const EXPERIENCE_TOLERANCE_YEARS: u64 = 2;

static YEARS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*years")
        .unwrap_or_else(|e| panic!("Failed to compile years pattern: {e}"))
});

/// Outcome of validating one generated answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerReview {
    pub issues: Vec<String>,
    pub confidence: Confidence,
}

impl AnswerReview {
    /// Returns true when no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates generated answers against the applicant's resume.
///
/// Three checks run in a fixed order, each contributing one issue at
/// most; confidence drops by 0.2 per issue from a base of 1.0.
pub struct ConfidenceValidator;

impl ConfidenceValidator {
    /// Reviews an answer against resume facts.
    pub fn validate(answer: &str, resume: &ResumeFacts) -> AnswerReview {
        let mut issues = Vec::new();

        if Self::has_skill_inflation(answer, resume) {
            issues.push("Potential skill inflation detected".to_string());
        }
        if Self::has_experience_inflation(answer, resume) {
            issues.push("Potential experience inflation detected".to_string());
        }
        if Self::has_unsupported_claims(answer, resume) {
            issues.push("Claims not supported by resume".to_string());
        }

        let confidence = Confidence::from_issue_count(issues.len());
        AnswerReview { issues, confidence }
    }

    /// A superlative paired with a skill the resume does not back.
    fn has_skill_inflation(answer: &str, resume: &ResumeFacts) -> bool {
        let answer_lower = answer.to_lowercase();
        let has_superlative = SUPERLATIVES.iter().any(|s| answer_lower.contains(s));
        if !has_superlative {
            return false;
        }

        let resume_skills: Vec<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();
        Self::extract_skills(&answer_lower)
            .iter()
            .any(|skill| !resume_skills.iter().any(|rs| rs.contains(*skill)))
    }

    /// A claimed year count more than the tolerance above the resume's.
    ///
    /// Both sides must state years explicitly ("5 years"); a resume with
    /// no parseable year count defaults to "0 years".
    fn has_experience_inflation(answer: &str, resume: &ResumeFacts) -> bool {
        let claimed = match Self::first_year_claim(answer) {
            Some(years) => years,
            None => return false,
        };
        let resume_text = if resume.total_experience.is_empty() {
            "0 years"
        } else {
            resume.total_experience.as_str()
        };
        let stated = match Self::first_year_claim(resume_text) {
            Some(years) => years,
            None => return false,
        };
        claimed > stated + EXPERIENCE_TOLERANCE_YEARS
    }

    fn first_year_claim(text: &str) -> Option<u64> {
        YEARS_PATTERN
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
    }

    /// A capitalized token (4+ characters) not found in any resume company.
    fn has_unsupported_claims(answer: &str, resume: &ResumeFacts) -> bool {
        let companies: Vec<String> = resume.companies.iter().map(|c| c.to_lowercase()).collect();
        answer
            .split_whitespace()
            .filter(|word| word.chars().count() > 3)
            .filter(|word| {
                word.chars()
                    .next()
                    .map(|c| c.is_uppercase())
                    .unwrap_or(false)
            })
            .any(|claim| {
                let claim_lower = claim.to_lowercase();
                !companies.iter().any(|c| c.contains(&claim_lower))
            })
    }

    /// Returns the known skills mentioned in lowercased answer text.
    fn extract_skills(answer_lower: &str) -> Vec<&'static str> {
        COMMON_SKILLS
            .iter()
            .filter(|skill| answer_lower.contains(**skill))
            .copied()
            .collect()
    }
}
