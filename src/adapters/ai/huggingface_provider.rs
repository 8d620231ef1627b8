//! Hugging Face Provider - AnswerProvider implementation for the hosted
//! inference API.
//!
//! Sends the prompt to `https://api-inference.huggingface.co/models/{model}`
//! and reads the first generated text from the response array. Cold models
//! return 503 while they load; that maps to a retryable error so the retry
//! loop rides out the warmup.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AnswerError, AnswerProvider, AnswerRequest, AnswerResponse, ProviderInfo};

/// Base URL for the hosted inference API.
const INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Configuration for the Hugging Face provider.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication.
    api_key: Secret<String>,
    /// Model repository to query (e.g. "mistralai/Mistral-7B-Instruct-v0.2").
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl HuggingFaceConfig {
    /// Creates a new configuration with the given API token.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }

    /// Sets the model repository to query.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
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

    /// Exposes the API token (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Hugging Face hosted inference provider.
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceProvider {
    /// Creates a new Hugging Face provider with the given configuration.
    pub fn new(config: HuggingFaceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the inference endpoint URL for the configured model.
    fn inference_url(&self) -> String {
        format!("{}/{}", INFERENCE_BASE_URL, self.config.model)
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &AnswerRequest) -> Result<Response, AnswerError> {
        let body = serde_json::json!({ "inputs": request.prompt });

        self.client
            .post(self.inference_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&body)
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
            429 => Err(AnswerError::rate_limited(30)),
            400..=499 => Err(AnswerError::InvalidRequest(error_body)),
            // 503 covers models still loading.
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

    /// Parses the generated text out of a successful response.
    async fn parse_response(&self, response: Response) -> Result<AnswerResponse, AnswerError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: Vec<WireGeneration> = response
            .json()
            .await
            .map_err(|e| AnswerError::parse(format!("Failed to parse response: {}", e)))?;

        let generation = wire_response
            .into_iter()
            .next()
            .ok_or_else(|| AnswerError::parse("Empty generation list in response"))?;

        Ok(AnswerResponse::new(
            generation.generated_text,
            self.config.model.clone(),
        ))
    }
}

#[async_trait]
impl AnswerProvider for HuggingFaceProvider {
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
                            "Hugging Face request failed, retrying"
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
                        "Hugging Face request failed, retrying"
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
        ProviderInfo::new("huggingface", &self.config.model)
    }
}

// ----- Hugging Face API Types -----

#[derive(Debug, Deserialize)]
struct WireGeneration {
    generated_text: String,
}
