//! Ollama Provider - AnswerProvider implementation for a locally hosted
//! Ollama instance.
//!
//! Talks to the `/api/generate` endpoint with streaming disabled, so a
//! single response carries the whole completion. No authentication is
//! required.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new()
//!     .with_model("llama2")
//!     .with_endpoint("http://localhost:11434/api/generate");
//!
//! let provider = OllamaProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// Temperature applied when the request does not set one.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Model to use (e.g. "llama2", "mistral").
    pub model: String,
    /// Generate endpoint URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaConfig {
    /// Creates a configuration pointing at a local Ollama instance.
    pub fn new() -> Self {
        Self {
            model: "llama2".to_string(),
            endpoint: "http://localhost:11434/api/generate".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the generate endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Ollama generate-endpoint provider.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a new Ollama provider with the given configuration.
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Converts our request to Ollama's format.
    fn to_wire_request(&self, request: &AnswerRequest) -> WireRequest {
        WireRequest {
            model: self.config.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &AnswerRequest) -> Result<Response, AnswerError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnswerError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AnswerError::network(format!("Connection failed: {}", e))
                } else {
                    AnswerError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to provider errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AnswerError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            404 => Err(AnswerError::InvalidRequest(format!(
                "Model not found: {}",
                error_body
            ))),
            400..=499 => Err(AnswerError::InvalidRequest(error_body)),
            500..=599 => Err(AnswerError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AnswerError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses the completion out of a successful response.
    async fn parse_response(&self, response: Response) -> Result<AnswerResponse, AnswerError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(AnswerResponse::new(
            wire_response.response,
            self.config.model.clone(),
        ))
    }
}

#[async_trait]
impl AnswerProvider for OllamaProvider {
    async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        let mut last_error = AnswerError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(&request).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(answer) => return Ok(answer),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        tracing::warn!(
                            run_id = %request.metadata.run_id,
                            error = %err,
                            "Ollama request failed, retrying"
                        );
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    tracing::warn!(
                        run_id = %request.metadata.run_id,
                        error = %err,
                        "Ollama request failed, retrying"
                    );
                    last_error = err;
                }
            }

            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("ollama", &self.config.model)
    }
}

// ----- Ollama API Types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    prompt: String,
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    response: String,
}
