//! Prometheus metrics endpoint

use axum::response::IntoResponse;

use crate::telemetry;

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    telemetry::render()
}
