//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FORMPILOT_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use formpilot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Generation enabled: {}", config.ai.enabled);
//! ```

mod ai;
mod autofill;
mod error;

pub use ai::{AiConfig, AiProviderKind};
pub use autofill::AutofillConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the FormPilot engine.
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every value has a default, so an empty environment yields a working
/// configuration with generation disabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (OpenAI/Ollama/HuggingFace)
    #[serde(default)]
    pub ai: AiConfig,

    /// Autofill behavior (step limits, thresholds, pacing)
    #[serde(default)]
    pub autofill: AutofillConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FORMPILOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FORMPILOT__AI__PROVIDER=ollama` -> `ai.provider = Ollama`
    /// - `FORMPILOT__AUTOFILL__MAX_STEPS=5` -> `autofill.max_steps = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FORMPILOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.autofill.validate()?;
        Ok(())
    }
}
