//! Inbound request type and validation
//!
//! Validation runs before any prompt is built so that rejected input never
//! costs a remote completion call.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Maximum question length, in characters
pub const MAX_QUESTION_CHARS: usize = 1000;
/// Maximum answer length, in characters
pub const MAX_ANSWER_CHARS: usize = 2000;

/// Reasons a sentiment request is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request cannot be nil")]
    MissingRequest,

    #[error("invalid request body: {0}")]
    Malformed(String),

    #[error("request body exceeds maximum size of {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Sentiment analysis request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SentimentRequest {
    /// The question or prompt the answer responds to
    #[schema(example = "Bagaimana pendapat Anda tentang layanan kami?")]
    pub text_pertanyaan: String,
    /// The answer whose sentiment is analyzed
    #[schema(example = "Layanan Anda sangat memuaskan dan responsif")]
    pub text_jawaban: String,
    /// Request a reasoning explanation from the model (default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub reasoning: Option<bool>,
}

impl SentimentRequest {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text_pertanyaan: question.into(),
            text_jawaban: answer.into(),
            reasoning: None,
        }
    }

    pub fn with_reasoning(mut self, reasoning: bool) -> Self {
        self.reasoning = Some(reasoning);
        self
    }

    /// Parse a request from a raw JSON body.
    ///
    /// An empty body or a literal `null` is a missing request rather than a
    /// syntax error.
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Option<Self> = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))?
        };

        value.ok_or(ValidationError::MissingRequest)
    }

    /// Whether the caller asked for a rationale
    pub fn wants_reasoning(&self) -> bool {
        self.reasoning.unwrap_or(false)
    }

    /// Check field presence and length limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field("text_pertanyaan", &self.text_pertanyaan, MAX_QUESTION_CHARS)?;
        check_field("text_jawaban", &self.text_jawaban, MAX_ANSWER_CHARS)?;
        Ok(())
    }
}

fn check_field(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}
