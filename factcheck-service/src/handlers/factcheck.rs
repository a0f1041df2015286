//! `POST /factcheck`: article text in, integrity analysis out.

use crate::error::FactCheckError;
use crate::models::FactCheckRequest;
use crate::services::metrics::{record_outcome, record_upstream_latency};
use crate::services::prompt::{build_prompt, ANALYSIS_TEMPERATURE};
use crate::services::GenerationParams;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::time::Instant;

/// Run one article through the completion model and relay its JSON verbatim.
///
/// The body is taken as raw bytes and a failed read is kept as a value: a
/// malformed or unreadable payload must surface as the generic internal
/// error, not as axum's extractor rejection.
pub async fn fact_check(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<serde_json::Value>, FactCheckError> {
    let result = analyze(&state, body).await;

    match &result {
        Ok(_) => record_outcome("success"),
        Err(e) => {
            match e {
                FactCheckError::MissingApiKey => {
                    tracing::warn!("Fact-check rejected: OpenAI API key is not configured")
                }
                FactCheckError::UpstreamFailure { status, body } => {
                    tracing::error!(status, error = %body, "OpenAI API error")
                }
                FactCheckError::Internal(cause) => {
                    tracing::error!(error = ?cause, "Fact-check handler error")
                }
            }
            record_outcome(e.outcome());
        }
    }

    result.map(Json)
}

async fn analyze(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<serde_json::Value, FactCheckError> {
    let provider = state
        .completion_provider
        .as_ref()
        .ok_or(FactCheckError::MissingApiKey)?;

    let body = body.map_err(|rejection| {
        FactCheckError::Internal(anyhow::anyhow!(
            "failed to read request body: {}",
            rejection.body_text()
        ))
    })?;
    let request: FactCheckRequest = serde_json::from_slice(&body)?;
    let prompt = build_prompt(&request.article_text);
    let params = GenerationParams {
        temperature: Some(ANALYSIS_TEMPERATURE),
        json_output: true,
    };

    tracing::debug!(
        provider = provider.name(),
        article_len = request.article_text.len(),
        "Requesting article analysis"
    );

    let started = Instant::now();
    let result = provider.complete_json(&prompt, &params).await;
    record_upstream_latency(provider.name(), provider.model(), started.elapsed());

    Ok(result?)
}

/// Any method other than POST on the fact-check route.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
