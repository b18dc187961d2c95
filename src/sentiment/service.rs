//! Sentiment analysis service
//!
//! Runs one classification: validate, prompt, one completion call, extract.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{
    extract::{self, ExtractionResult},
    prompt::{build_messages, PromptMode},
    request::SentimentRequest,
    response::SentimentResponse,
    types::Sentiment,
};
use crate::{
    error::{AppError, AppResult},
    llm::{CompletionProvider, CompletionRequest},
    telemetry,
};

/// Classifies answers through a completion provider
pub struct SentimentService {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl SentimentService {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Labels this service can return
    pub fn supported_sentiments(&self) -> Vec<Sentiment> {
        Sentiment::ALL.to_vec()
    }

    /// Analyze the sentiment of an answer in the context of its question.
    ///
    /// Invalid input fails before the provider is called. Provider failures
    /// propagate; uninterpretable model output degrades to `Netral`.
    pub async fn analyze(&self, request: &SentimentRequest) -> AppResult<SentimentResponse> {
        let trace_id = Uuid::new_v4().to_string()[..8].to_string();
        let start = Instant::now();
        let want_reasoning = request.wants_reasoning();

        info!(
            trace_id = %trace_id,
            text_pertanyaan_length = request.text_pertanyaan.chars().count(),
            text_jawaban_length = request.text_jawaban.chars().count(),
            reasoning_requested = want_reasoning,
            "Starting sentiment analysis"
        );

        if let Err(e) = request.validate() {
            warn!(trace_id = %trace_id, error = %e, "Request validation failed");
            telemetry::record_analysis("invalid", None, start.elapsed().as_secs_f64());
            return Err(e.into());
        }

        let mode = PromptMode::new(want_reasoning);
        let messages = build_messages(&request.text_pertanyaan, &request.text_jawaban, mode);
        let completion = CompletionRequest::new(
            self.model.clone(),
            Vec::from(messages),
            mode.max_tokens(),
            mode.temperature(),
        );

        let content = match self.provider.invoke(&completion).await {
            Ok(content) => content,
            Err(e) => {
                error!(
                    trace_id = %trace_id,
                    provider = self.provider.name(),
                    kind = e.kind(),
                    error = %e,
                    "Failed to analyze sentiment"
                );
                telemetry::record_analysis("upstream_error", None, start.elapsed().as_secs_f64());
                return Err(AppError::Llm(e));
            }
        };

        let result = interpret(&content, mode, &trace_id);

        info!(
            trace_id = %trace_id,
            sentiment = %result.sentiment,
            reasoning_present = result.reasoning.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Sentiment analysis completed"
        );
        telemetry::record_analysis("success", Some(result.sentiment), start.elapsed().as_secs_f64());

        Ok(result.into())
    }
}

/// Extract a result from already-fetched content, never failing.
///
/// A failed reasoning extraction is retried label-only on the same content;
/// the provider is not called again. Both extractions reject exactly the same
/// content, so every failure resolves to neutral without a rationale.
fn interpret(content: &Value, mode: PromptMode, trace_id: &str) -> ExtractionResult {
    match extract::extract(content, mode.wants_reasoning()) {
        Ok(result) => return result,
        Err(e) => error!(
            trace_id = %trace_id,
            result = %content,
            error = %e,
            "Failed to extract sentiment from LLM response"
        ),
    }

    // Label-only extraction fails on the same non-text content, so in practice
    // this ends at neutral as well.
    if mode.wants_reasoning() {
        match extract::extract(content, false) {
            Ok(result) => return result,
            Err(e) => warn!(trace_id = %trace_id, error = %e, "Label-only extraction failed"),
        }
    }

    ExtractionResult::neutral()
}
