//! Answer Provider Adapters.
//!
//! Implementations of the AnswerProvider port for various LLM backends.
//!
//! ## Available Adapters
//!
//! - `MockAnswerProvider` - Configurable mock for testing
//! - `OpenAiProvider` - OpenAI chat completions (GPT-4, GPT-3.5)
//! - `OllamaProvider` - Locally hosted Ollama models
//! - `HuggingFaceProvider` - Hugging Face hosted inference API
//! - `TemplateAnswerProvider` - Deterministic canned-answer fallback
//! - `FailoverAnswerProvider` - Wrapper with automatic failover between providers

mod failover_provider;
mod huggingface_provider;
mod mock_provider;
mod ollama_provider;
mod openai_provider;
mod template_provider;

pub use failover_provider::{FailoverAnswerProvider, NoFallback};
pub use huggingface_provider::{HuggingFaceConfig, HuggingFaceProvider};
pub use mock_provider::{MockAnswerProvider, MockError, MockResponse};
pub use ollama_provider::{OllamaConfig, OllamaProvider};
pub use openai_provider::{OpenAiConfig, OpenAiProvider, DEFAULT_SYSTEM_PROMPT};
pub use template_provider::TemplateAnswerProvider;
