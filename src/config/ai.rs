//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Whether generated answers are used at all. Off by default; with
    /// generation disabled only profile data and stored answers fill
    /// fields.
    #[serde(default)]
    pub enabled: bool,

    /// Which provider backs answer generation
    #[serde(default)]
    pub provider: AiProviderKind,

    /// Model name passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint override; each provider has its own default
    pub endpoint: Option<String>,

    /// API key for providers that need one
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    OpenAi,
    Ollama,
    HuggingFace,
}

impl AiProviderKind {
    /// Whether the provider requires an API key.
    pub fn needs_api_key(&self) -> bool {
        matches!(self, AiProviderKind::OpenAi | AiProviderKind::HuggingFace)
    }
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // A disabled provider needs no credentials
        if !self.enabled {
            return Ok(());
        }

        if self.provider.needs_api_key() && !self.has_api_key() {
            return Err(ValidationError::MissingRequired("FORMPILOT__AI__API_KEY"));
        }

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidEndpointUrl);
            }
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: AiProviderKind::default(),
            model: default_model(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}
