//! Completion endpoint client
//!
//! Sends one prompt to the configured LLM endpoint and hands back the first
//! choice's content without interpreting it.

use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    llm::models::{CompletionRequest, CompletionResponse},
    telemetry,
};

/// Failures of a single completion call
#[derive(Debug, Error)]
pub enum LlmError {
    /// The HTTP exchange could not complete (DNS, connect, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("response error {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response decoded but carried no choices
    #[error("no choices in response")]
    EmptyChoices,

    /// A success response whose body is not a completion response
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Transport(_) => "transport",
            LlmError::UpstreamStatus { .. } => "upstream_status",
            LlmError::EmptyChoices => "empty_choices",
            LlmError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// Interface to a remote completion backend
///
/// The sentiment service only depends on this trait, so tests and alternative
/// backends can stand in for the HTTP client.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Run one non-streaming completion.
    ///
    /// Returns `choices[0].message.content` as received, normally a JSON
    /// string holding the model's text.
    async fn invoke(&self, request: &CompletionRequest) -> Result<Value, LlmError>;
}

/// HTTP client for the configured completion endpoint
pub struct LlmClient {
    client: reqwest::Client,
    url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl LlmClient {
    /// Create a new client
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&config.llm_api_key).context("LLM_API_KEY is not a valid header value")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            url: config.llm_url.clone(),
            headers,
            timeout: config.llm_timeout,
        })
    }

    async fn send(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request error in LLM call");
                e
            })?;

        let status = response.status();
        debug!(status = %status, "LLM response status");

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status_code = status.as_u16(), response = %body, "HTTP status error");
            return Err(LlmError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body, "Failed to parse LLM response");
            LlmError::InvalidResponse(e.to_string())
        })?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            error!("No choices in LLM response");
            LlmError::EmptyChoices
        })?;

        debug!(
            model = ?completion.model,
            content_length = choice.message.content.as_str().map(str::len),
            "LLM API call successful"
        );

        Ok(choice.message.content)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    fn name(&self) -> &'static str {
        "llm"
    }

    #[instrument(
        skip(self, request),
        fields(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            temperature = request.temperature
        )
    )]
    async fn invoke(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        debug!("Making API call to LLM");

        let start = Instant::now();
        let result = self.send(request).await;
        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        telemetry::record_llm_call(outcome, start.elapsed().as_secs_f64());

        result
    }
}
