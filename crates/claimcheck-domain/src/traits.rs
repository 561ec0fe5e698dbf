//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use serde::{Deserialize, Serialize};

/// A single prompt submitted to a completion service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier understood by the provider (e.g., "gpt-4")
    pub model: String,

    /// Full prompt text (instruction followed by the content under review)
    pub prompt: String,

    /// Ceiling on the length of the generated response, in tokens
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a request for the given model
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (claimcheck-llm). One provider
/// value is expected to be built once and reused for every request.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Submit a prompt and return the model's raw text reply
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}

impl<P: LlmProvider + ?Sized> LlmProvider for &P {
    type Error = P::Error;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        (**self).complete(request)
    }
}
