//! Resume facts - parsed resume content used for answer grounding.

use serde::{Deserialize, Serialize};

/// Structured facts extracted from the applicant's resume.
///
/// Everything defaults to empty so a missing resume degrades to "no
/// supporting facts" rather than an error; validation then treats all
/// claims as unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFacts {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Total experience as written, e.g. "5 years".
    #[serde(default)]
    pub total_experience: String,
    #[serde(default)]
    pub experience_highlights: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub positions: Vec<String>,
}

impl ResumeFacts {
    /// Parses the leading year count from `total_experience`, defaulting
    /// to zero ("5 years" -> 5, "" -> 0).
    pub fn total_years(&self) -> u32 {
        let digits: String = self
            .total_experience
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Returns the summary, or "Not provided" when empty.
    pub fn summary_text(&self) -> String {
        if self.summary.is_empty() {
            "Not provided".to_string()
        } else {
            self.summary.clone()
        }
    }

    /// Returns skills joined for prompt interpolation.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }

    /// Returns the experience year count as text.
    pub fn experience_years_text(&self) -> String {
        self.total_years().to_string()
    }

    /// Returns experience highlights, one per line.
    pub fn highlights_joined(&self) -> String {
        self.experience_highlights.join("\n")
    }

    /// Returns employer names joined for prompt interpolation.
    pub fn companies_joined(&self) -> String {
        self.companies.join(", ")
    }

    /// Returns position titles joined for prompt interpolation.
    pub fn positions_joined(&self) -> String {
        self.positions.join(", ")
    }
}
