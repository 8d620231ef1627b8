//! Document Store Port - Access to the applicant's uploaded documents.
//!
//! The decision engine never attaches files itself (file inputs are
//! detected but skipped); the host shell fetches documents through this
//! port when it drives an upload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::store::StoreError;

/// Port for retrieving stored applicant documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document by kind and identifier.
    ///
    /// Returns `StoreError::NotFound` when no such document exists.
    async fn get(&self, kind: DocumentKind, id: &str) -> Result<StoredDocument, StoreError>;
}

/// Category of an applicant document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// All document kinds.
    pub fn all() -> &'static [DocumentKind] {
        &[DocumentKind::Resume, DocumentKind::CoverLetter]
    }

    /// Directory-safe name for this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// A stored document with its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    /// Original file name.
    pub name: String,
    /// MIME type, e.g. "application/pdf".
    pub mime_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl StoredDocument {
    /// Creates a stored document.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}
