//! Auxiliary endpoint integration tests
//!
//! - GET /api/v1/sentiment/types
//! - GET /health
//! - GET /docs, /docs/openapi.json
//! - GET /metrics
//! - CORS preflight

use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestHarness;

#[tokio::test]
async fn test_sentiment_types() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/v1/sentiment/types").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"sentiments": ["Positif", "Negatif", "Netral"]})
    );
}

#[tokio::test]
async fn test_health_endpoint_returns_proper_structure() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sentiment-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_health_does_not_call_llm() {
    let harness = TestHarness::new().await;
    harness.llm.expect_no_calls().await;

    harness.server.get("/health").await.assert_status_ok();
    harness.server.get("/api/v1/sentiment/types").await.assert_status_ok();
}

#[tokio::test]
async fn test_openapi_document_served() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/docs/openapi.json").await;

    response.assert_status_ok();
    let spec = response.json::<Value>();
    assert!(spec["paths"]["/api/v1/sentiment/analyze"].is_object());
    assert!(spec["components"]["schemas"]["SentimentResponse"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_served() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/docs").await;

    response.assert_status_ok();
    assert!(response.text().contains("swagger-ui"));
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .method(axum::http::Method::OPTIONS, "/api/v1/sentiment/analyze")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://example.com"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin"),
        HeaderValue::from_static("*")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = TestHarness::new().await;

    harness
        .server
        .get("/api/v1/unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_endpoint_renders_after_analysis() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content(r#"{"sentiment":"Positif"}"#).await;

    harness
        .server
        .post("/api/v1/sentiment/analyze")
        .json(&crate::common::test_data::analyze_request())
        .await
        .assert_status_ok();

    let response = harness.server.get("/metrics").await;
    response.assert_status_ok();
}
