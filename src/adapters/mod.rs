//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the decision engine to the outside world:
//! - `ai` - Answer providers (OpenAI, Ollama, Hugging Face, canned fallback)
//! - `document` - Applicant document storage
//! - `memory` - Answer memory storage
//! - `page` - Page drivers (scripted fixture for tests)
//! - `profile` - Applicant profile storage

pub mod ai;
pub mod document;
pub mod memory;
pub mod page;
pub mod profile;
