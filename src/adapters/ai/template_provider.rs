//! Template Provider - deterministic canned-answer fallback.
//!
//! Matches the question text against a fixed keyword table and returns a
//! profile value or a generic professional answer. Never fails, so a
//! failover chain that ends here always produces something usable even
//! when the real provider is down or misconfigured.
//!
//! Keyword branches are checked in order; the first match wins.

use async_trait::async_trait;

use crate::domain::page::JobContext;
use crate::domain::profile::ApplicantProfile;
use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// Canned-answer provider built from the applicant's profile and the job
/// being applied to.
#[derive(Debug, Clone)]
pub struct TemplateAnswerProvider {
    profile: ApplicantProfile,
    job: JobContext,
}

impl TemplateAnswerProvider {
    /// Creates a provider for one application session.
    pub fn new(profile: ApplicantProfile, job: JobContext) -> Self {
        Self { profile, job }
    }

    /// Picks the canned answer for a question.
    fn canned_answer(&self, question: &str) -> String {
        let q = question.to_lowercase();
        let title = &self.job.title;
        let company = &self.job.company;

        if q.contains("linkedin") {
            non_empty_or(&self.profile.linkedin, "https://linkedin.com/in/profile")
        } else if q.contains("github") {
            non_empty_or(&self.profile.github, "https://github.com/username")
        } else if q.contains("portfolio") || q.contains("website") {
            non_empty_or(&self.profile.website, "https://yourportfolio.com")
        } else if q.contains("phone") {
            non_empty_or(&self.profile.phone, "+1 (555) 000-0000")
        } else if q.contains("country") {
            non_empty_or(&self.profile.country, "United States")
        } else if q.contains("location") || q.contains("city") {
            non_empty_or(&self.profile.city, "New York")
        } else if q.contains("address") {
            non_empty_or(&self.profile.address, "123 Main St")
        } else if q.contains("state") || q.contains("province") {
            non_empty_or(&self.profile.state, "NY")
        } else if q.contains("zip") || q.contains("postal") {
            non_empty_or(&self.profile.zip_code, "10001")
        } else if q.contains("residing") || q.contains("currently") || q.contains("based") {
            "Yes".to_string()
        } else if q.contains("reloca") || q.contains("willing") || q.contains("move") {
            "Yes, I am willing to relocate".to_string()
        } else if q.contains("sponsor") || q.contains("visa") {
            "No, I do not require visa sponsorship".to_string()
        } else if q.contains("experience") || q.contains("background") {
            format!(
                "I have solid professional experience in software development and engineering. \
                 I've worked on various projects involving problem-solving, collaboration, and \
                 delivering quality results. I'm excited to bring this experience to the {} \
                 position at {}.",
                title, company
            )
        } else if q.contains("interest") || q.contains("motivation") || q.contains("why") {
            format!(
                "I'm very interested in this {} opportunity at {}. Your company's mission and \
                 work in this space align well with my career goals, and I'm excited about the \
                 chance to contribute and grow with your team.",
                title, company
            )
        } else if q.contains("skill") || q.contains("strength") {
            format!(
                "I have strong technical skills, excellent communication abilities, and a proven \
                 track record of learning new technologies quickly. I'm particularly interested \
                 in developing expertise relevant to this {} role.",
                title
            )
        } else if q.contains("goal") || q.contains("future") || q.contains("achieve") {
            format!(
                "I aim to develop deep expertise in my field while contributing meaningfully to \
                 impactful projects. I'm looking forward to growing professionally with {}.",
                company
            )
        } else if q.contains("available") || q.contains("start") || q.contains("notice") {
            "I am available to start immediately.".to_string()
        } else if q.contains("work") && (q.contains("auth") || q.contains("legal")) {
            "I have the right to work in the United States.".to_string()
        } else if q.contains("tell") || q.contains("about") || q.contains("describe") {
            format!(
                "I'm a dedicated professional with a strong background in relevant areas. I'm \
                 enthusiastic about this opportunity at {} and believe my skills and experience \
                 make me a great fit for the {} role.",
                company, title
            )
        } else {
            format!(
                "I'm very interested in this opportunity and believe my background aligns well \
                 with this {} position at {}.",
                title, company
            )
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[async_trait]
impl AnswerProvider for TemplateAnswerProvider {
    async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        let answer = self.canned_answer(&request.metadata.question);
        Ok(AnswerResponse::new(answer, "canned"))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("template", "canned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RunId;
    use crate::ports::RequestMetadata;

    fn provider_with(profile: ApplicantProfile) -> TemplateAnswerProvider {
        let job = JobContext {
            title: "Backend Engineer".to_string(),
            company: "Acme Corp".to_string(),
            url: "https://jobs.acme.test/123".to_string(),
            platform: crate::domain::page::Platform::Unknown,
            description: String::new(),
        };
        TemplateAnswerProvider::new(profile, job)
    }

    fn request_for(question: &str) -> AnswerRequest {
        AnswerRequest::new(
            question,
            RequestMetadata::new(RunId::new(), question, "label"),
        )
    }

    #[test]
    fn linkedin_uses_profile_value_when_present() {
        let mut profile = ApplicantProfile::default();
        profile.linkedin = "https://linkedin.com/in/jdoe".to_string();
        let provider = provider_with(profile);

        let answer = provider.canned_answer("What is your LinkedIn profile?");
        assert_eq!(answer, "https://linkedin.com/in/jdoe");
    }

    #[test]
    fn linkedin_falls_back_to_placeholder() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("What is your LinkedIn profile?");
        assert_eq!(answer, "https://linkedin.com/in/profile");
    }

    #[test]
    fn relocation_beats_the_why_branch() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("Why are you willing to relocate?");
        assert_eq!(answer, "Yes, I am willing to relocate");
    }

    #[test]
    fn sponsorship_questions_decline_sponsorship() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("Do you require visa sponsorship?");
        assert_eq!(answer, "No, I do not require visa sponsorship");
    }

    #[test]
    fn background_beats_tell_us_about() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("Tell us about your background");
        assert!(answer.contains("Backend Engineer"));
        assert!(answer.contains("Acme Corp"));
        assert!(answer.starts_with("I have solid professional experience"));
    }

    #[test]
    fn work_authorization_needs_both_keywords() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("Are you legally authorized to work in the US?");
        assert_eq!(answer, "I have the right to work in the United States.");
    }

    #[test]
    fn unmatched_question_gets_the_generic_answer() {
        let provider = provider_with(ApplicantProfile::default());
        let answer = provider.canned_answer("Favorite color?");
        assert_eq!(
            answer,
            "I'm very interested in this opportunity and believe my background aligns well \
             with this Backend Engineer position at Acme Corp."
        );
    }

    #[tokio::test]
    async fn generate_never_fails() {
        let provider = provider_with(ApplicantProfile::default());
        let response = provider
            .generate(request_for("Anything at all"))
            .await
            .unwrap();
        assert!(!response.is_empty());
        assert_eq!(response.model, "canned");
    }
}
