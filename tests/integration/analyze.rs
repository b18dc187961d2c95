//! Sentiment analysis endpoint integration tests
//!
//! Tests for `POST /api/v1/sentiment/analyze`:
//! - model output interpretation (structured, plain text, fallback)
//! - request validation before any completion call, including the body size limit
//! - upstream failures surfacing as 5xx

use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{test_data, TestHarness};

const ANALYZE: &str = "/api/v1/sentiment/analyze";

#[tokio::test]
async fn test_structured_positive_response() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content(r#"{"sentiment":"Positive"}"#).await;

    let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"sentiment": "Positif"}));
}

#[tokio::test]
async fn test_structured_response_without_reasoning_key_in_reasoning_mode() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content(r#"{"sentiment":"Positive"}"#).await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request_with_reasoning())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"sentiment": "Positif"}));
}

#[tokio::test]
async fn test_reasoning_returned_when_requested() {
    let harness = TestHarness::new().await;
    harness
        .llm
        .mock_content(r#"{"sentiment":"negative","reasoning":"kata kunci negatif"}"#)
        .await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request_with_reasoning())
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"sentiment": "Negatif", "reasoning": "kata kunci negatif"})
    );
}

#[tokio::test]
async fn test_plain_text_output_uses_keyword_scan() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content("Jawaban ini terasa netral dan objektif").await;

    let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"sentiment": "Netral"}));
}

#[tokio::test]
async fn test_gibberish_output_defaults_to_neutral() {
    let harness = TestHarness::new().await;
    harness
        .llm
        .mock_content("random unparseable gibberish with no keywords")
        .await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request_with_reasoning())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"sentiment": "Netral"}));
}

#[tokio::test]
async fn test_null_content_defaults_to_neutral() {
    let harness = TestHarness::new().await;
    harness.llm.mock_raw_content(Value::Null).await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request_with_reasoning())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"sentiment": "Netral"}));
    assert_eq!(harness.llm.received_requests().await.len(), 1);
}

#[tokio::test]
async fn test_label_only_completion_request_shape() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content(r#"{"sentiment":"Netral"}"#).await;

    harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request())
        .await
        .assert_status_ok();

    let bodies = harness.llm.received_bodies().await;
    assert_eq!(bodies.len(), 1);

    let body = &bodies[0];
    assert_eq!(body["model"], "telkom-ai-instruct");
    assert_eq!(body["stream"], false);
    assert_eq!(body["max_tokens"], 100);
    assert_eq!(body["temperature"], 0.0);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");

    let user_prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(user_prompt.contains(test_data::QUESTION));
    assert!(user_prompt.contains(test_data::ANSWER));
}

#[tokio::test]
async fn test_reasoning_completion_request_shape() {
    let harness = TestHarness::new().await;
    harness.llm.mock_content(r#"{"sentiment":"Positif","reasoning":"puas"}"#).await;

    harness
        .server
        .post(ANALYZE)
        .json(&test_data::analyze_request_with_reasoning())
        .await
        .assert_status_ok();

    let bodies = harness.llm.received_bodies().await;
    assert_eq!(bodies[0]["max_tokens"], 300);
    assert_eq!(bodies[0]["temperature"], 0.1);
    assert!(bodies[0]["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("reasoning"));
}

#[tokio::test]
async fn test_empty_question_rejected_without_llm_call() {
    let harness = TestHarness::new().await;
    harness.llm.expect_no_calls().await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&json!({"text_pertanyaan": "", "text_jawaban": "jawaban"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Invalid request", "message": "text_pertanyaan cannot be empty"})
    );
    assert!(harness.llm.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_oversized_answer_rejected_without_llm_call() {
    let harness = TestHarness::new().await;
    harness.llm.expect_no_calls().await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&json!({"text_pertanyaan": "pertanyaan", "text_jawaban": "a".repeat(2001)}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "text_jawaban exceeds maximum length of 2000 characters"
    );
    assert!(harness.llm.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let harness = TestHarness::new().await;
    harness.llm.expect_no_calls().await;

    let response = harness.server.post(ANALYZE).text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request");

    let response = harness
        .server
        .post(ANALYZE)
        .json(&json!({"text_jawaban": "jawaban"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = harness.server.post(ANALYZE).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "request cannot be nil");
}

#[tokio::test]
async fn test_oversized_body_rejected_with_json_error() {
    let harness = TestHarness::new().await;
    harness.llm.expect_no_calls().await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&json!({"text_pertanyaan": "q", "text_jawaban": "a".repeat(70_000)}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "error": "Invalid request",
            "message": "request body exceeds maximum size of 65536 bytes"
        })
    );
    assert!(harness.llm.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_body_limit_follows_configuration() {
    let harness = TestHarness::with_config(|config| {
        config.max_body_bytes = 256;
    })
    .await;
    harness.llm.expect_no_calls().await;

    let response = harness
        .server
        .post(ANALYZE)
        .json(&json!({"text_pertanyaan": "q", "text_jawaban": "a".repeat(300)}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.json::<Value>()["message"],
        "request body exceeds maximum size of 256 bytes"
    );
}

#[tokio::test]
async fn test_upstream_500_is_a_server_error() {
    let harness = TestHarness::new().await;
    harness.llm.mock_status(500, "internal failure").await;

    let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Sentiment analysis failed");
    assert_eq!(body["message"], "response error 500: internal failure");
    assert_eq!(harness.llm.received_requests().await.len(), 1);
}

#[tokio::test]
async fn test_empty_choices_is_a_server_error() {
    let harness = TestHarness::new().await;
    harness.llm.mock_empty_choices().await;

    let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["message"], "no choices in response");
}

#[tokio::test]
async fn test_upstream_timeout_is_a_gateway_timeout() {
    let harness = TestHarness::with_config(|config| {
        config.llm_timeout = Duration::from_millis(200);
    })
    .await;
    harness
        .llm
        .mock_content_delayed(r#"{"sentiment":"Positif"}"#, Duration::from_secs(2))
        .await;

    let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(response.json::<Value>()["error"], "Sentiment analysis failed");
}

#[tokio::test]
async fn test_every_output_maps_to_canonical_label() {
    let outputs = [
        r#"{"sentiment":"POSITIF"}"#,
        r#"{"sentiment":"mixed"}"#,
        r#"{"sentiment":42}"#,
        "[]",
        "",
        "```json\n{\"sentiment\": \"negative\"}\n```",
        "Sentimen jawaban ini Positif.",
    ];

    for output in outputs {
        let harness = TestHarness::new().await;
        harness.llm.mock_content(output).await;

        let response = harness.server.post(ANALYZE).json(&test_data::analyze_request()).await;

        response.assert_status_ok();
        let sentiment = response.json::<Value>()["sentiment"].as_str().unwrap().to_string();
        assert!(
            ["Positif", "Negatif", "Netral"].contains(&sentiment.as_str()),
            "{output:?} produced {sentiment}"
        );
    }
}
