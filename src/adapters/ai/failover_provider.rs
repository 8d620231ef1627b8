//! Failover Answer Provider - wrapper that falls back to a second provider
//! when the first one fails.
//!
//! Unlike the per-provider retry loops, this falls back on any failure,
//! including non-retryable ones like a rejected API key, and on empty
//! answers. The intended pairing is a real LLM provider backed by the
//! canned [`TemplateAnswerProvider`](super::TemplateAnswerProvider), so a
//! misconfigured or offline provider still yields a usable answer.
//!
//! # Example
//!
//! ```ignore
//! let primary = OpenAiProvider::new(openai_config);
//! let fallback = TemplateAnswerProvider::new(profile, job);
//!
//! let provider = FailoverAnswerProvider::new(primary)
//!     .with_fallback(fallback);
//! ```

use async_trait::async_trait;

use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// Answer provider wrapper with automatic failover support.
///
/// Wraps a primary provider and optionally a fallback provider. Any
/// primary failure, or an empty primary answer, routes the request to
/// the fallback.
pub struct FailoverAnswerProvider<P: AnswerProvider, F: AnswerProvider = NoFallback> {
    primary: P,
    fallback: Option<F>,
}

/// Marker type for when no fallback is configured.
pub struct NoFallback;

#[async_trait]
impl AnswerProvider for NoFallback {
    async fn generate(&self, _: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        unreachable!("NoFallback should never be called")
    }

    fn provider_info(&self) -> ProviderInfo {
        unreachable!("NoFallback should never be called")
    }
}

impl<P: AnswerProvider> FailoverAnswerProvider<P, NoFallback> {
    /// Creates a failover provider with just a primary (no fallback).
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }
}

impl<P: AnswerProvider, F: AnswerProvider> FailoverAnswerProvider<P, F> {
    /// Adds a fallback provider.
    pub fn with_fallback<F2: AnswerProvider>(
        self,
        fallback: F2,
    ) -> FailoverAnswerProvider<P, F2> {
        FailoverAnswerProvider {
            primary: self.primary,
            fallback: Some(fallback),
        }
    }
}

#[async_trait]
impl<P: AnswerProvider, F: AnswerProvider> AnswerProvider for FailoverAnswerProvider<P, F> {
    async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        match self.primary.generate(request.clone()).await {
            Ok(response) if !response.is_empty() => Ok(response),
            Ok(_) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(
                        run_id = %request.metadata.run_id,
                        primary = %self.primary.provider_info().name,
                        "Primary provider returned an empty answer, using fallback"
                    );
                    fallback.generate(request).await
                }
                None => Err(AnswerError::parse("Provider returned an empty answer")),
            },
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(
                        run_id = %request.metadata.run_id,
                        primary = %self.primary.provider_info().name,
                        error = %err,
                        "Primary provider failed, using fallback"
                    );
                    fallback.generate(request).await
                }
                None => Err(err),
            },
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.primary.provider_info()
    }
}
