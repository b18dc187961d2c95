//! HTTP routes for the sentiment API
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod docs;
pub mod health;
pub mod metrics;
pub mod sentiment;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/api/v1/sentiment/analyze", post(sentiment::analyze_sentiment))
        .route("/api/v1/sentiment/types", get(sentiment::sentiment_types));

    // Public routes (health checks, metrics)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(api_routes)
        .merge(public_routes)
        .merge(docs::create_docs_router())
        // Global middleware (applied to all routes)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
