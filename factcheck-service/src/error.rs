//! Errors returned by the fact-check endpoint.

use crate::services::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_API_KEY_MESSAGE: &str = "OpenAI API key is not configured.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to get a valid response from AI model.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

/// Failure branches of a fact-check request. Callers only ever see the fixed
/// message of each variant; causes go to the logs.
#[derive(Debug, Error)]
pub enum FactCheckError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    #[error("{}", UPSTREAM_FAILURE_MESSAGE)]
    UpstreamFailure { status: u16, body: serde_json::Value },

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal(#[source] anyhow::Error),
}

impl FactCheckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FactCheckError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            FactCheckError::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            FactCheckError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            FactCheckError::MissingApiKey => "missing_api_key",
            FactCheckError::UpstreamFailure { .. } => "upstream_error",
            FactCheckError::Internal(_) => "internal_error",
        }
    }
}

impl From<ProviderError> for FactCheckError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => {
                FactCheckError::UpstreamFailure { status, body }
            }
            other => FactCheckError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<serde_json::Error> for FactCheckError {
    fn from(err: serde_json::Error) -> Self {
        FactCheckError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for FactCheckError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
