//! Store Error - Shared failure modes of the storage ports.
//!
//! The profile, answer-memory, and document stores all fail the same
//! three ways, so they share one error type.

use thiserror::Error;

/// Storage port errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested item does not exist.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked up.
        what: String,
    },

    /// Stored data could not be decoded, or data could not be encoded.
    #[error("serialization error: {message}")]
    Serialization {
        /// Error details.
        message: String,
    },

    /// IO error reaching the backing storage.
    #[error("storage io error: {message}")]
    Io {
        /// Error details.
        message: String,
    },
}

impl StoreError {
    /// Creates a not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
