//! Mock provider implementation for testing.

use super::{CompletionProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Parsed JSON content of the first choice.
    Json(serde_json::Value),
    /// Non-success status from the completion API.
    Upstream { status: u16, body: serde_json::Value },
    /// Message content that is not valid JSON.
    RawContent(String),
    /// Transport failure.
    Network(String),
}

/// Mock completion provider that records every call.
pub struct MockCompletionProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_params: Mutex<Option<GenerationParams>>,
}

impl MockCompletionProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_params: Mutex::new(None),
        }
    }

    /// Number of `complete_json` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        self.last_params.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete_json(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<serde_json::Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        if let Ok(mut last) = self.last_params.lock() {
            *last = Some(params.clone());
        }

        match &self.outcome {
            MockOutcome::Json(value) => Ok(value.clone()),
            MockOutcome::Upstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockOutcome::RawContent(content) => Ok(serde_json::from_str(content)?),
            MockOutcome::Network(msg) => Err(ProviderError::Network(msg.clone())),
        }
    }
}
