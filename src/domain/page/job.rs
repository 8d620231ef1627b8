//! Job posting context - platform detection and posting extraction.

use serde::{Deserialize, Serialize};

/// Job title fallback when no candidate passes the length gate.
const DEFAULT_JOB_TITLE: &str = "Job Position";

/// Company fallback when no candidate passes the length gate.
const DEFAULT_COMPANY: &str = "Company";

/// Titles at or above this length are treated as page noise.
const MAX_TITLE_CHARS: usize = 200;

/// Company names at or above this length are treated as page noise.
const MAX_COMPANY_CHARS: usize = 100;

/// Descriptions must exceed this length to be considered real content.
const MIN_DESCRIPTION_CHARS: usize = 100;

/// Descriptions are cut to this length before prompt interpolation.
const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Job board platform hosting the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Greenhouse,
    Lever,
    Ashby,
    Workable,
    Bamboohr,
    Linkedin,
    Indeed,
    Angellist,
    Builtin,
    Powertofly,
    Hired,
    Triplebyte,
    Guidepoint,
    Workopolis,
    /// Unrecognized host on an application-looking URL.
    Generic,
    Unknown,
}

/// Host marker table for platform detection, in match order.
static PLATFORM_MARKERS: &[(&str, Platform)] = &[
    ("greenhouse", Platform::Greenhouse),
    ("lever", Platform::Lever),
    ("ashby", Platform::Ashby),
    ("workable", Platform::Workable),
    ("bamboohr", Platform::Bamboohr),
    ("linkedin", Platform::Linkedin),
    ("indeed", Platform::Indeed),
    ("angel", Platform::Angellist),
    ("builtin", Platform::Builtin),
    ("powertofly", Platform::Powertofly),
    ("hired", Platform::Hired),
    ("triplebyte", Platform::Triplebyte),
    ("guidepoint", Platform::Guidepoint),
    ("workopolis", Platform::Workopolis),
];

impl Platform {
    /// Detects the platform from the page host and URL.
    pub fn detect(url: &str, host: &str) -> Platform {
        let host = host.to_lowercase();
        for (marker, platform) in PLATFORM_MARKERS {
            if host.contains(marker) {
                return *platform;
            }
        }

        let url = url.to_lowercase();
        if url.contains("/apply") || url.contains("/application") {
            return Platform::Generic;
        }

        Platform::Unknown
    }

    /// Returns the platform's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Greenhouse => "Greenhouse",
            Platform::Lever => "Lever",
            Platform::Ashby => "Ashby",
            Platform::Workable => "Workable",
            Platform::Bamboohr => "BambooHR",
            Platform::Linkedin => "LinkedIn",
            Platform::Indeed => "Indeed",
            Platform::Angellist => "AngelList",
            Platform::Builtin => "BuiltIn",
            Platform::Powertofly => "PowerToFly",
            Platform::Hired => "Hired",
            Platform::Triplebyte => "Triplebyte",
            Platform::Guidepoint => "Guidepoint",
            Platform::Workopolis => "Workopolis",
            Platform::Generic => "Generic",
            Platform::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw text candidates the driver collected for the job posting, in
/// selector priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSignals {
    pub url: String,
    pub host: String,
    pub title_candidates: Vec<String>,
    pub company_candidates: Vec<String>,
    pub description_candidates: Vec<String>,
}

/// Normalized job posting context used in prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    pub title: String,
    pub company: String,
    pub url: String,
    pub platform: Platform,
    pub description: String,
}

impl JobContext {
    /// Builds the job context from driver signals, applying the length
    /// gates and fallbacks.
    pub fn from_signals(signals: &JobSignals) -> Self {
        Self {
            title: job_title_from(&signals.title_candidates),
            company: company_name_from(&signals.company_candidates),
            url: signals.url.clone(),
            platform: Platform::detect(&signals.url, &signals.host),
            description: job_description_from(&signals.description_candidates),
        }
    }
}

/// Picks the first plausible job title, falling back to a placeholder.
pub fn job_title_from(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty() && c.chars().count() < MAX_TITLE_CHARS)
        .map(|c| c.to_string())
        .unwrap_or_else(|| DEFAULT_JOB_TITLE.to_string())
}

/// Picks the first plausible company name, falling back to a placeholder.
pub fn company_name_from(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty() && c.chars().count() < MAX_COMPANY_CHARS)
        .map(|c| c.to_string())
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string())
}

/// Picks the first substantial description and caps its length.
/// Returns an empty string when nothing qualifies.
pub fn job_description_from(candidates: &[String]) -> String {
    candidates
        .iter()
        .find(|c| c.chars().count() > MIN_DESCRIPTION_CHARS)
        .map(|c| c.chars().take(MAX_DESCRIPTION_CHARS).collect())
        .unwrap_or_default()
}
