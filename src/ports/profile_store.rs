//! Profile Store Port - Persistence for the applicant profile and
//! resume facts.
//!
//! The profile is user-owned and read-only to the decision engine; the
//! engine loads it at session start and never mutates it mid-run.
//!
//! # Contract
//!
//! - `load_profile` / `load_resume` return the default (all-empty)
//!   record when nothing has been stored yet; `StoreError` is reserved
//!   for real failures (unreadable storage, corrupt data).
//! - Saves replace the whole record.

use async_trait::async_trait;

use crate::domain::profile::{ApplicantProfile, ResumeFacts};

use super::store::StoreError;

/// Port for applicant profile and resume persistence.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Loads the stored profile, or an empty one when none exists.
    async fn load_profile(&self) -> Result<ApplicantProfile, StoreError>;

    /// Replaces the stored profile.
    async fn save_profile(&self, profile: &ApplicantProfile) -> Result<(), StoreError>;

    /// Loads the stored resume facts, or empty facts when none exist.
    async fn load_resume(&self) -> Result<ResumeFacts, StoreError>;

    /// Replaces the stored resume facts.
    async fn save_resume(&self, resume: &ResumeFacts) -> Result<(), StoreError>;
}
