//! Canonical sentiment labels
//!
//! Every classification ends in exactly one of three labels. The wire
//! spelling is Indonesian (`Positif`, `Negatif`, `Netral`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Sentiment {
    /// Approving, satisfied or supportive answer
    #[serde(rename = "Positif")]
    Positive,
    /// Disapproving, dissatisfied or rejecting answer
    #[serde(rename = "Negatif")]
    Negative,
    /// Objective, balanced or emotionless answer
    #[serde(rename = "Netral")]
    Neutral,
}

impl Sentiment {
    /// All labels, in the order they are advertised to clients
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Wire spelling of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positif",
            Sentiment::Negative => "Negatif",
            Sentiment::Neutral => "Netral",
        }
    }

    /// Map a model-produced label to a canonical one.
    ///
    /// Accepts Indonesian and English spellings in any letter case.
    /// Anything unrecognised is `Neutral`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "positif" | "positive" => Sentiment::Positive,
            "negatif" | "negative" => Sentiment::Negative,
            "netral" | "neutral" => Sentiment::Neutral,
            _ => Sentiment::Neutral,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
