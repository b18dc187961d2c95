//! Sentiment endpoints
//!
//! - `POST /api/v1/sentiment/analyze` - classify an answer
//! - `GET /api/v1/sentiment/types` - list supported labels

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    error::{AppResult, ErrorResponse},
    sentiment::{SentimentRequest, SentimentResponse, SentimentTypesResponse, ValidationError},
    AppState,
};

/// Analyze the sentiment of an answer relative to its question
///
/// The body is parsed by hand so that malformed JSON and oversized bodies get
/// the same `{error, message}` shape as every other validation failure.
#[utoipa::path(
    post,
    path = "/api/v1/sentiment/analyze",
    tag = "Sentiment",
    request_body = SentimentRequest,
    responses(
        (status = 200, description = "Sentiment analyzed", body = SentimentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 502, description = "Completion endpoint failed", body = ErrorResponse),
        (status = 504, description = "Completion endpoint timed out", body = ErrorResponse)
    )
)]
pub async fn analyze_sentiment(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<SentimentResponse>)> {
    let body = body.map_err(|rejection| body_rejection(rejection, state.config.max_body_bytes))?;
    let request = SentimentRequest::from_body(&body)?;
    let response = state.sentiment_service.analyze(&request).await?;

    Ok((StatusCode::OK, Json(response)))
}

fn body_rejection(rejection: BytesRejection, limit: usize) -> ValidationError {
    warn!(status = %rejection.status(), error = %rejection.body_text(), "Request body rejected");

    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::BodyTooLarge { limit }
    } else {
        ValidationError::Malformed(rejection.body_text())
    }
}

/// List the sentiment labels the API can return
#[utoipa::path(
    get,
    path = "/api/v1/sentiment/types",
    tag = "Sentiment",
    responses(
        (status = 200, description = "Supported sentiment labels", body = SentimentTypesResponse)
    )
)]
pub async fn sentiment_types(State(state): State<Arc<AppState>>) -> Json<SentimentTypesResponse> {
    Json(SentimentTypesResponse {
        sentiments: state.sentiment_service.supported_sentiments(),
    })
}
