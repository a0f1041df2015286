//! Application startup and lifecycle management.

use crate::config::FactCheckConfig;
use crate::handlers::{
    self,
    factcheck::{fact_check, method_not_allowed},
};
use crate::services::metrics::init_metrics;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::CompletionProvider;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured.
    pub completion_provider: Option<Arc<dyn CompletionProvider>>,
}

/// Build the HTTP router around `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/factcheck",
            post(fact_check)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: FactCheckConfig) -> Result<Self, AppError> {
        init_metrics();

        let completion_provider = match config.openai.api_key.clone() {
            Some(api_key) => {
                let provider: Arc<dyn CompletionProvider> =
                    Arc::new(OpenAiProvider::new(OpenAiConfig {
                        api_key,
                        base_url: config.openai.base_url.clone(),
                        model: config.openai.model.clone(),
                    }));
                tracing::info!(
                    model = %config.openai.model,
                    base_url = %config.openai.base_url,
                    "Initialized OpenAI completion provider"
                );
                Some(provider)
            }
            None => {
                tracing::warn!(
                    "OPENAI_API_KEY not configured - fact-check requests will fail until it is set"
                );
                None
            }
        };

        let state = AppState {
            completion_provider,
        };

        // Port 0 = random port for testing
        let http_addr = format!("{}:{}", config.common.host, config.common.port);
        let http_listener = TcpListener::bind(&http_addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", http_addr, e);
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!("Fact-check service: HTTP on port {}", http_port);

        Ok(Self {
            http_port,
            http_listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.http_listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
