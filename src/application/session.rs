//! ApplySession - per-run context for one auto-apply attempt.
//!
//! The session is constructed once at the start of a run and passed
//! explicitly into every handler. It carries the applicant's profile and
//! resume facts, the job context read from the page, and the run id used
//! for log correlation. Handlers never reach for shared state.

use crate::domain::foundation::{RunId, Timestamp};
use crate::domain::page::JobContext;
use crate::domain::profile::{ApplicantProfile, ResumeFacts};
use crate::ports::{PageDriver, PageError, ProfileStore, StoreError};

/// Context for one auto-apply run.
#[derive(Debug, Clone)]
pub struct ApplySession {
    /// Correlates every log line and provider request of this run.
    pub run_id: RunId,
    /// Applicant profile loaded at session start, read-only during the run.
    pub profile: ApplicantProfile,
    /// Resume facts loaded at session start.
    pub resume: ResumeFacts,
    /// Job posting context read from the page.
    pub job: JobContext,
    pub started_at: Timestamp,
}

/// Error type for session start.
#[derive(Debug)]
pub enum SessionError {
    /// Applicant data could not be loaded.
    ProfileUnavailable(String),
    /// The page could not be read for job signals.
    PageUnavailable(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::ProfileUnavailable(msg) => {
                write!(f, "Profile unavailable: {}", msg)
            }
            SessionError::PageUnavailable(msg) => write!(f, "Page unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        SessionError::ProfileUnavailable(err.to_string())
    }
}

impl From<PageError> for SessionError {
    fn from(err: PageError) -> Self {
        SessionError::PageUnavailable(err.to_string())
    }
}

impl ApplySession {
    /// Starts a session: loads applicant data and reads the job posting
    /// from the current page.
    pub async fn start(
        profile_store: &dyn ProfileStore,
        driver: &dyn PageDriver,
    ) -> Result<Self, SessionError> {
        // 1. Load applicant data
        let profile = profile_store.load_profile().await?;
        let resume = profile_store.load_resume().await?;

        // 2. Read job posting signals from the page
        let signals = driver.job_signals().await?;
        let job = JobContext::from_signals(&signals);

        let session = Self {
            run_id: RunId::new(),
            profile,
            resume,
            job,
            started_at: Timestamp::now(),
        };

        tracing::info!(
            run_id = %session.run_id,
            platform = %session.job.platform,
            company = %session.job.company,
            "Auto-apply session started"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::FixturePageDriver;
    use crate::adapters::profile::InMemoryProfileStore;
    use crate::domain::page::{JobSignals, PageSnapshot, Platform};

    fn greenhouse_signals() -> JobSignals {
        JobSignals {
            url: "https://boards.greenhouse.io/globex/jobs/42".to_string(),
            host: "boards.greenhouse.io".to_string(),
            title_candidates: vec!["Staff Engineer".to_string()],
            company_candidates: vec!["Globex".to_string()],
            description_candidates: vec![],
        }
    }

    #[tokio::test]
    async fn start_loads_profile_and_job_context() {
        let profile = ApplicantProfile {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let store = InMemoryProfileStore::new().with_profile(profile);
        let driver = FixturePageDriver::new(PageSnapshot::default())
            .with_signals(greenhouse_signals());

        let session = ApplySession::start(&store, &driver).await.unwrap();

        assert_eq!(session.profile.first_name, "Ada");
        assert_eq!(session.job.title, "Staff Engineer");
        assert_eq!(session.job.company, "Globex");
        assert_eq!(session.job.platform, Platform::Greenhouse);
    }

    #[tokio::test]
    async fn empty_store_yields_default_applicant_data() {
        let store = InMemoryProfileStore::new();
        let driver = FixturePageDriver::new(PageSnapshot::default());

        let session = ApplySession::start(&store, &driver).await.unwrap();

        assert!(session.profile.first_name.is_empty());
        assert!(session.resume.skills.is_empty());
    }

    #[tokio::test]
    async fn each_session_gets_its_own_run_id() {
        let store = InMemoryProfileStore::new();
        let driver = FixturePageDriver::new(PageSnapshot::default());

        let first = ApplySession::start(&store, &driver).await.unwrap();
        let second = ApplySession::start(&store, &driver).await.unwrap();

        assert_ne!(first.run_id, second.run_id);
    }
}
