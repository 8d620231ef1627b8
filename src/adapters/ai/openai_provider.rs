//! OpenAI Provider - AnswerProvider implementation for OpenAI's chat
//! completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAiProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// System prompt sent with every generation request unless the caller
/// provides one.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a professional job application assistant. \
     Generate concise, professional answers for job applications.";

/// Token cap applied when the request does not set one.
const DEFAULT_MAX_TOKENS: u32 = 500;

/// Temperature applied when the request does not set one.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gpt-3.5-turbo", "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI chat completions provider.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to OpenAI's format.
    fn to_wire_request(&self, request: &AnswerRequest) -> WireRequest {
        let system = request
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        WireRequest {
            model: self.config.model.clone(),
            messages: vec![
                WireMessage {
                    role: "system".to_string(),
                    content: system,
                },
                WireMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &AnswerRequest) -> Result<Response, AnswerError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
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
            401 => Err(AnswerError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(AnswerError::rate_limited(retry_after))
            }
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

    /// Parses retry-after seconds out of a rate-limit error body.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI embeds "try again in Xs" in the error message sometimes.
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30
    }

    /// Parses the completion out of a successful response.
    async fn parse_response(&self, response: Response) -> Result<AnswerResponse, AnswerError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnswerError::parse("No choices in response"))?;

        Ok(AnswerResponse::new(
            choice.message.content,
            wire_response.model,
        ))
    }
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
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
                            "OpenAI request failed, retrying"
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
                        "OpenAI request failed, retrying"
                    );
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RunId;
    use crate::ports::RequestMetadata;

    fn test_request() -> AnswerRequest {
        AnswerRequest::new(
            "Why do you want this role?",
            RequestMetadata::new(RunId::new(), "Why do you want this role?", "why role"),
        )
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAiConfig::new("test-key")
            .with_model("gpt-4o-mini")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(10))
            .with_max_retries(5);

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn wire_request_carries_system_and_user_messages() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test"));
        let wire = provider.to_wire_request(&test_request());

        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.messages[1].content, "Why do you want this role?");
        assert_eq!(wire.max_tokens, 500);
        assert_eq!(wire.temperature, 0.7);
    }

    #[test]
    fn wire_request_honors_caller_overrides() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test"));
        let request = test_request()
            .with_system_prompt("Be terse")
            .with_max_tokens(100)
            .with_temperature(0.2);
        let wire = provider.to_wire_request(&request);

        assert_eq!(wire.messages[0].content, "Be terse");
        assert_eq!(wire.max_tokens, 100);
        assert_eq!(wire.temperature, 0.2);
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit exceeded. Please try again in 30 seconds."}}"#;
        assert_eq!(OpenAiProvider::parse_retry_after(error), 30);
    }

    #[test]
    fn parse_retry_after_default() {
        let error = r#"{"error":{"message":"Something went wrong"}}"#;
        assert_eq!(OpenAiProvider::parse_retry_after(error), 30);
    }

    #[test]
    fn provider_info_names_the_model() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test").with_model("gpt-3.5-turbo"));
        let info = provider.provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-3.5-turbo");
    }
}
