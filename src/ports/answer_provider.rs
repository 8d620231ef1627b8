//! Answer Provider Port - Interface for LLM answer generation.
//!
//! This port abstracts the AI services that draft answers for form
//! questions (OpenAI, Ollama, HuggingFace, the deterministic template
//! fallback), keeping the fill handlers decoupled from wire formats.
//!
//! # Design
//!
//! - Requests carry a fully rendered prompt; provider JSON stays in the adapters
//! - Generation failure is recoverable: callers fall back or leave the field blank
//! - Error types distinguish retryable transport faults from hard failures
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedProvider;
//!
//! #[async_trait]
//! impl AnswerProvider for CannedProvider {
//!     async fn generate(&self, _request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
//!         Ok(AnswerResponse::new("I have five years of Rust experience.", "canned"))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("canned", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RunId;

/// Port for LLM answer generation.
///
/// Implementations translate the rendered prompt into a provider call
/// and return the trimmed answer text.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Generates an answer for one form question.
    async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for answer generation.
#[derive(Debug, Clone)]
pub struct AnswerRequest {
    /// Fully rendered prompt (template with placeholders resolved).
    pub prompt: String,
    /// System prompt guiding model behavior, for providers that take one.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
    /// Request metadata for log correlation.
    pub metadata: RequestMetadata,
}

impl AnswerRequest {
    /// Creates a new request with the rendered prompt.
    pub fn new(prompt: impl Into<String>, metadata: RequestMetadata) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            metadata,
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Request metadata for log correlation.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Auto-apply run this request belongs to.
    pub run_id: RunId,
    /// Question text being answered, for log context.
    pub question: String,
    /// Label of the field the answer targets.
    pub field_label: String,
}

impl RequestMetadata {
    /// Creates new request metadata.
    pub fn new(run_id: RunId, question: impl Into<String>, field_label: impl Into<String>) -> Self {
        Self {
            run_id,
            question: question.into(),
            field_label: field_label.into(),
        }
    }
}

/// Response from answer generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    /// Generated answer text, trimmed.
    pub answer: String,
    /// Model that produced the answer.
    pub model: String,
}

impl AnswerResponse {
    /// Creates a response, trimming the answer text.
    pub fn new(answer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            answer: answer.into().trim().to_string(),
            model: model.into(),
        }
    }

    /// Returns true when the provider produced no usable text.
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "openai", "ollama").
    pub name: String,
    /// Model identifier (e.g. "gpt-3.5-turbo").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Answer provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// Provider is switched off or has no usable credentials.
    #[error("provider disabled or missing API key")]
    Disabled,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider rejected the request shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AnswerError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AnswerError::RateLimited { .. }
                | AnswerError::Unavailable { .. }
                | AnswerError::Network(_)
                | AnswerError::Timeout { .. }
        )
    }
}
