use factcheck_service::config::{FactCheckConfig, ObservabilityConfig};
use factcheck_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    init_tracing(
        "factcheck-service",
        &observability.log_level,
        observability.otlp_endpoint.as_deref(),
    );

    let config = FactCheckConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
