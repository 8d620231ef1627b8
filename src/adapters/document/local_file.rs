//! Local Filesystem Document Store - Implementation of DocumentStore.
//!
//! Reads applicant documents from a directory tree organized by kind:
//!
//! ```text
//! {base_path}/
//! ├── resume/
//! │   └── resume.pdf
//! └── cover_letter/
//!     └── cover_letter.docx
//! ```
//!
//! The store is read-only; the host shell manages uploads.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{DocumentKind, DocumentStore, StoreError, StoredDocument};

/// Local filesystem store for applicant documents.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    /// Base directory for all document storage.
    base_path: PathBuf,
}

impl LocalDocumentStore {
    /// Creates a new local document store with the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the full file path for a document.
    fn document_path(&self, kind: DocumentKind, id: &str) -> PathBuf {
        self.base_path.join(kind.dir_name()).join(id)
    }

    /// Guesses the MIME type from the file extension.
    fn mime_for(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            Some("rtf") => "application/rtf",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn get(&self, kind: DocumentKind, id: &str) -> Result<StoredDocument, StoreError> {
        // Ids are plain file names; anything path-like stays outside.
        if id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err(StoreError::io(format!("invalid document id: {}", id)));
        }

        let path = self.document_path(kind, id);

        let bytes = fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                StoreError::not_found(format!("{} document {}", kind, id))
            }
            _ => StoreError::io(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        Ok(StoredDocument::new(id, Self::mime_for(&path), bytes))
    }
}
