//! Response types for the sentiment API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{extract::ExtractionResult, types::Sentiment};

/// Sentiment analysis result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SentimentResponse {
    /// The analyzed sentiment
    #[schema(example = "Positif")]
    pub sentiment: Sentiment,
    /// Model explanation, present only when requested and produced
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(
        example = "Teks menunjukkan kepuasan pelanggan dengan kata-kata positif seperti 'memuaskan' dan 'responsif'"
    )]
    pub reasoning: Option<String>,
}

impl From<ExtractionResult> for SentimentResponse {
    fn from(result: ExtractionResult) -> Self {
        Self {
            sentiment: result.sentiment,
            reasoning: result.reasoning,
        }
    }
}

/// Supported sentiment labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SentimentTypesResponse {
    #[schema(example = json!(["Positif", "Negatif", "Netral"]))]
    pub sentiments: Vec<Sentiment>,
}
