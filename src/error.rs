//! Error types for the sentiment API
//!
//! `AppError` is what handlers return; it renders as `{error, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::{llm::LlmError, sentiment::ValidationError};

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sentiment analysis failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Error category
    #[schema(example = "Invalid request")]
    pub error: String,
    /// Human-readable detail
    #[schema(example = "text_pertanyaan cannot be empty")]
    pub message: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(ValidationError::BodyTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(LlmError::Transport(e)) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            AppError::Llm(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error, message) = match &self {
            AppError::Validation(e) => ("Invalid request", e.to_string()),
            AppError::Llm(e) => ("Sentiment analysis failed", e.to_string()),
            AppError::Internal(_) => ("Internal server error", "Internal server error".to_string()),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
