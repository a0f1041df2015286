//! Metrics collection and Prometheus export.
//!
//! Installs the Prometheus recorder and records fact-check outcomes and
//! completion API latency.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder.
///
/// Only the first call installs anything; later calls (several applications
/// built in one test process) keep the existing recorder.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
            tracing::info!("Prometheus metrics initialized");
        }
        Err(e) => tracing::warn!(error = %e, "Prometheus recorder not installed"),
    }
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count one fact-check request by outcome (`success`, `upstream_error`, ...).
pub fn record_outcome(outcome: &'static str) {
    counter!("factcheck_requests_total", "outcome" => outcome).increment(1);
}

/// Record how long the completion API took to answer.
pub fn record_upstream_latency(provider: &'static str, model: &str, elapsed: Duration) {
    histogram!(
        "factcheck_upstream_latency_seconds",
        "provider" => provider,
        "model" => model.to_string()
    )
    .record(elapsed.as_secs_f64());
}
