#![allow(dead_code)]

use factcheck_service::config::{
    FactCheckConfig, ObservabilityConfig, OpenAiSettings, DEFAULT_MODEL,
};
use factcheck_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config;
use std::time::Duration;

pub const TEST_API_KEY: &str = "sk-test-key";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at `openai_base_url`.
    pub async fn spawn(api_key: Option<&str>, openai_base_url: &str) -> Self {
        let config = FactCheckConfig {
            common: Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            openai: OpenAiSettings {
                api_key: api_key.map(|k| Secret::new(k.to_string())),
                base_url: openai_base_url.to_string(),
                model: DEFAULT_MODEL.to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "debug".to_string(),
                otlp_endpoint: None,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.http_port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let address = format!("http://127.0.0.1:{}", port);
        let client = reqwest::Client::new();

        // Wait for HTTP server to be ready by polling health endpoint
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self { address, client }
    }

    pub async fn post_factcheck(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.client
            .post(format!("{}/factcheck", self.address))
            .header("content-type", "application/json")
            .body(body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Analysis object in the shape the prompt asks for.
pub fn sample_analysis() -> serde_json::Value {
    serde_json::json!({
        "botAnalysis": { "riskLevel": "LOW" },
        "claimsAnalysis": [{
            "text": "The sky is green.",
            "verdict": "VERIFIED FALSE",
            "reasoning": "Scientific consensus: Rayleigh scattering makes the daytime sky appear blue."
        }],
        "biasAnalysis": {
            "overallAssessment": "The text makes a single factual assertion without observable bias.",
            "flags": [{
                "type": "Missing Context",
                "description": "\"The sky is green.\" is stated without any source."
            }]
        }
    })
}

/// Chat-completions envelope whose first choice carries `content`.
pub fn completion_with_content(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 420, "completion_tokens": 96, "total_tokens": 516 }
    })
}
