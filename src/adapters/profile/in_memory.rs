//! In-Memory Profile Store Adapter
//!
//! Holds the applicant profile and resume facts in memory. Useful for
//! testing and for hosts that supply the profile per session instead of
//! persisting it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::{ApplicantProfile, ResumeFacts};
use crate::ports::{ProfileStore, StoreError};

/// In-memory storage for the applicant profile.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profile: Arc<RwLock<ApplicantProfile>>,
    resume: Arc<RwLock<ResumeFacts>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a profile.
    pub fn with_profile(self, profile: ApplicantProfile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
            resume: self.resume,
        }
    }

    /// Seeds the store with resume facts.
    pub fn with_resume(self, resume: ResumeFacts) -> Self {
        Self {
            profile: self.profile,
            resume: Arc::new(RwLock::new(resume)),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self) -> Result<ApplicantProfile, StoreError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_profile(&self, profile: &ApplicantProfile) -> Result<(), StoreError> {
        *self.profile.write().await = profile.clone();
        Ok(())
    }

    async fn load_resume(&self) -> Result<ResumeFacts, StoreError> {
        Ok(self.resume.read().await.clone())
    }

    async fn save_resume(&self, resume: &ResumeFacts) -> Result<(), StoreError> {
        *self.resume.write().await = resume.clone();
        Ok(())
    }
}
