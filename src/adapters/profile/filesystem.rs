//! Filesystem storage adapter for the applicant profile
//!
//! Stores the profile and resume facts as YAML files in a configurable
//! base directory: {base_dir}/profile.yaml and {base_dir}/resume.yaml.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::profile::{ApplicantProfile, ResumeFacts};
use crate::ports::{ProfileStore, StoreError};

/// Filesystem-based profile storage.
#[derive(Debug, Clone)]
pub struct FsProfileStore {
    base_dir: PathBuf,
}

impl FsProfileStore {
    /// Create new filesystem storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profile_path(&self) -> PathBuf {
        self.base_dir.join("profile.yaml")
    }

    fn resume_path(&self) -> PathBuf {
        self.base_dir.join("resume.yaml")
    }

    /// Ensure parent directory exists
    async fn ensure_dir_exists(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }

    /// Write file atomically using a temporary file
    async fn write_atomic(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        self.ensure_dir_exists(path).await?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| StoreError::io(format!("Failed to write temporary file: {}", e)))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, path)
            .await
            .map_err(|e| StoreError::io(format!("Failed to rename file: {}", e)))?;

        Ok(())
    }

    /// Reads and decodes a YAML file, or returns the default when the
    /// file does not exist yet.
    async fn read_or_default<T>(&self, path: &Path) -> Result<T, StoreError>
    where
        T: Default + serde::de::DeserializeOwned,
    {
        if !path.exists() {
            return Ok(T::default());
        }

        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::io(format!("Failed to read file: {}", e)))?;

        serde_yaml::from_str(&yaml).map_err(|e| StoreError::serialization(e.to_string()))
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn load_profile(&self) -> Result<ApplicantProfile, StoreError> {
        self.read_or_default(&self.profile_path()).await
    }

    async fn save_profile(&self, profile: &ApplicantProfile) -> Result<(), StoreError> {
        let yaml =
            serde_yaml::to_string(profile).map_err(|e| StoreError::serialization(e.to_string()))?;
        self.write_atomic(&self.profile_path(), &yaml).await
    }

    async fn load_resume(&self) -> Result<ResumeFacts, StoreError> {
        self.read_or_default(&self.resume_path()).await
    }

    async fn save_resume(&self, resume: &ResumeFacts) -> Result<(), StoreError> {
        let yaml =
            serde_yaml::to_string(resume).map_err(|e| StoreError::serialization(e.to_string()))?;
        self.write_atomic(&self.resume_path(), &yaml).await
    }
}
