//! Prometheus metrics
//!
//! Owns the global recorder and the helpers the pipeline records through.
//! The HTTP exposition lives in `routes::metrics`.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

use crate::sentiment::Sentiment;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "sentiment_analyses_total",
        "Sentiment analyses by outcome and label"
    );
    metrics::describe_histogram!(
        "sentiment_analysis_duration_seconds",
        "End-to-end sentiment analysis duration in seconds"
    );
    metrics::describe_counter!(
        "sentiment_extractions_total",
        "Model outputs interpreted, by extraction strategy"
    );
    metrics::describe_counter!(
        "sentiment_llm_requests_total",
        "Completion endpoint calls by outcome"
    );
    metrics::describe_histogram!(
        "sentiment_llm_request_duration_seconds",
        "Completion endpoint call duration in seconds"
    );
}

/// Current metrics in Prometheus text format
pub fn render() -> String {
    PROMETHEUS_HANDLE.render()
}

/// Record a finished analysis
pub fn record_analysis(outcome: &str, sentiment: Option<Sentiment>, duration_secs: f64) {
    let label = sentiment.map(|s| s.as_str()).unwrap_or("none");
    metrics::counter!(
        "sentiment_analyses_total",
        "outcome" => outcome.to_string(),
        "sentiment" => label
    )
    .increment(1);
    metrics::histogram!("sentiment_analysis_duration_seconds", "outcome" => outcome.to_string())
        .record(duration_secs);
}

/// Record which extraction strategy produced a label
pub fn record_extraction(strategy: &'static str) {
    metrics::counter!("sentiment_extractions_total", "strategy" => strategy).increment(1);
}

/// Record a completion endpoint call
pub fn record_llm_call(outcome: &'static str, duration_secs: f64) {
    metrics::counter!("sentiment_llm_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("sentiment_llm_request_duration_seconds").record(duration_secs);
}
