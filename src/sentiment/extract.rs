//! Model output interpretation
//!
//! Turns whatever the completion endpoint returned into a canonical label.
//! The chain is linear and total for text content:
//!
//! 1. decode the text as JSON; an object with a string `sentiment` field is
//!    *structured*, everything else is *plain text*
//! 2. structured content: read `sentiment` (normalized) and, when asked for,
//!    a non-empty `reasoning`
//! 3. plain text: keyword scan, positive before negative before neutral,
//!    falling back to neutral
//!
//! Only content that is not text at all fails, with [`ExtractionError`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::types::Sentiment;
use crate::telemetry;

/// Whole-content markdown code fence, optionally tagged `json`
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*```(?:json|JSON)?\s*(.*?)\s*```\s*$").unwrap());

/// Keywords searched by the plain-text scan, in priority order
const KEYWORDS: [(Sentiment, [&str; 2]); 3] = [
    (Sentiment::Positive, ["positif", "positive"]),
    (Sentiment::Negative, ["negatif", "negative"]),
    (Sentiment::Neutral, ["netral", "neutral"]),
];

/// Canonical outcome of interpreting model output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub sentiment: Sentiment,
    pub reasoning: Option<String>,
}

impl ExtractionResult {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Content could not be interpreted at all
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("unable to extract sentiment from {0} content")]
    NotText(&'static str),
}

/// Model output after the JSON decode attempt
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedContent<'a> {
    /// JSON object carrying a string `sentiment` field
    Structured(Map<String, Value>),
    /// Anything else, as the original text
    PlainText(&'a str),
}

/// Decode raw model text.
///
/// Never fails: text that is not a qualifying JSON object comes back as
/// [`DecodedContent::PlainText`] holding the original text.
pub fn decode(raw: &str) -> DecodedContent<'_> {
    if let Some(fields) = structured_fields(raw) {
        return DecodedContent::Structured(fields);
    }

    if let Some(fields) = CODE_FENCE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|body| structured_fields(body.as_str()))
    {
        debug!("Decoded JSON from fenced code block");
        return DecodedContent::Structured(fields);
    }

    DecodedContent::PlainText(raw)
}

fn structured_fields(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) if fields.get("sentiment").is_some_and(Value::is_string) => Some(fields),
        _ => None,
    }
}

/// One way of getting a label out of decoded content
pub trait ExtractionStrategy: Sync {
    /// Strategy name for logs and metrics
    fn name(&self) -> &'static str;

    /// Returns `None` when this strategy does not apply to the content
    fn extract(&self, content: &DecodedContent<'_>, want_reasoning: bool) -> Option<ExtractionResult>;
}

/// Reads the `sentiment` and `reasoning` fields of a JSON object
pub struct StructuredFieldExtractor;

impl ExtractionStrategy for StructuredFieldExtractor {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn extract(&self, content: &DecodedContent<'_>, want_reasoning: bool) -> Option<ExtractionResult> {
        let DecodedContent::Structured(fields) = content else {
            return None;
        };

        let sentiment = Sentiment::normalize(fields.get("sentiment")?.as_str()?);
        let reasoning = if want_reasoning {
            fields
                .get("reasoning")
                .and_then(Value::as_str)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        Some(ExtractionResult { sentiment, reasoning })
    }
}

/// Case-insensitive keyword search over free text
pub struct KeywordScanExtractor;

impl KeywordScanExtractor {
    /// First matching label in priority order, if any
    pub fn scan(text: &str) -> Option<Sentiment> {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(sentiment, _)| *sentiment)
    }
}

impl ExtractionStrategy for KeywordScanExtractor {
    fn name(&self) -> &'static str {
        "keyword_scan"
    }

    fn extract(&self, content: &DecodedContent<'_>, _want_reasoning: bool) -> Option<ExtractionResult> {
        let DecodedContent::PlainText(text) = content else {
            return None;
        };

        Self::scan(text).map(|sentiment| ExtractionResult {
            sentiment,
            reasoning: None,
        })
    }
}

/// Strategies tried in order; the first `Some` wins
static FALLBACK_CHAIN: [&dyn ExtractionStrategy; 2] = [&StructuredFieldExtractor, &KeywordScanExtractor];

/// Interpret decoded content, defaulting to neutral when nothing matches
pub fn extract_from_decoded(content: &DecodedContent<'_>, want_reasoning: bool) -> ExtractionResult {
    for strategy in FALLBACK_CHAIN {
        if let Some(result) = strategy.extract(content, want_reasoning) {
            debug!(strategy = strategy.name(), sentiment = %result.sentiment, "Sentiment extracted");
            telemetry::record_extraction(strategy.name());
            return result;
        }
    }

    debug!("No sentiment keyword found, defaulting to neutral");
    telemetry::record_extraction("default");
    ExtractionResult::neutral()
}

/// Interpret raw completion content.
///
/// Fails only when the content is not a JSON string, which points at a
/// misbehaving upstream rather than ambiguous model output.
pub fn extract(content: &Value, want_reasoning: bool) -> Result<ExtractionResult, ExtractionError> {
    let raw = content.as_str().ok_or_else(|| ExtractionError::NotText(json_kind(content)))?;

    let decoded = decode(raw);
    if let DecodedContent::PlainText(text) = &decoded {
        warn!(content = %text, "Content is not a sentiment JSON object, scanning text");
    }

    Ok(extract_from_decoded(&decoded, want_reasoning))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
