//! Mock Answer Provider for testing.
//!
//! Provides a configurable mock implementation of the AnswerProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAnswerProvider::new()
//!     .with_response("I am available to start immediately.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.generate(request).await?;
//! assert_eq!(response.answer, "I am available to start immediately.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// Mock answer provider for testing.
///
/// Configurable to return specific answers, simulate delays, or inject
/// errors.
#[derive(Debug, Clone)]
pub struct MockAnswerProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<AnswerRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful answer.
    Success { answer: String },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a disabled provider.
    Disabled,
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate a rejected request.
    InvalidRequest { message: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unparseable response.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AnswerError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Disabled => AnswerError::Disabled,
            MockError::RateLimited { retry_after_secs } => {
                AnswerError::rate_limited(retry_after_secs)
            }
            MockError::AuthenticationFailed => AnswerError::AuthenticationFailed,
            MockError::InvalidRequest { message } => AnswerError::InvalidRequest(message),
            MockError::Unavailable { message } => AnswerError::unavailable(message),
            MockError::Network { message } => AnswerError::network(message),
            MockError::Parse { message } => AnswerError::parse(message),
            MockError::Timeout { timeout_secs } => AnswerError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAnswerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnswerProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful answer to the queue.
    pub fn with_response(self, answer: impl Into<String>) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Success {
            answer: answer.into(),
        });
        drop(responses);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<AnswerRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                answer: "Mock response".to_string(),
            })
    }
}

#[async_trait]
impl AnswerProvider for MockAnswerProvider {
    async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // Get configured response
        match self.next_response() {
            MockResponse::Success { answer } => {
                Ok(AnswerResponse::new(answer, self.info.model.clone()))
            }
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
