//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Ports
//!
//! - `AnswerProvider` - LLM answer generation for form questions
//! - `PageDriver` - The page being filled: scan, fill, click
//! - `ProfileStore` - Applicant profile and resume facts persistence
//! - `AnswerStore` - Answer memory persistence
//! - `DocumentStore` - Stored applicant documents (resume, cover letter)

mod answer_provider;
mod answer_store;
mod document_store;
mod page_driver;
mod profile_store;
mod store;

pub use answer_provider::{
    AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo, RequestMetadata,
};
pub use answer_store::AnswerStore;
pub use document_store::{DocumentKind, DocumentStore, StoredDocument};
pub use page_driver::{PageDriver, PageError};
pub use profile_store::ProfileStore;
pub use store::StoreError;
