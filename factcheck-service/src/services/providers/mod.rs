//! Completion provider abstractions and implementations.
//!
//! The handler talks to a `CompletionProvider` so the OpenAI backend can be
//! swapped for a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The completion API answered with a non-success status.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: serde_json::Value },

    #[error("Network error: {0}")]
    Network(String),

    /// The response envelope did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The model's message content was not valid JSON.
    #[error("Invalid JSON content: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

/// Generation parameters for a completion request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Ask the model for a JSON object instead of free text.
    pub json_output: bool,
}

/// A chat-completion backend that answers a single prompt with JSON.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name used in logs and metric labels.
    fn name(&self) -> &'static str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Send `prompt` as one user message and parse the first choice's
    /// content as JSON.
    async fn complete_json(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<serde_json::Value, ProviderError>;
}
