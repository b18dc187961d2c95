//! Wire types for the remote completion endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a prompt message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged prompt message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body sent to the completion endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Always `false`; responses are read in one piece
    pub stream: bool,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, max_tokens: u32, temperature: f64) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            max_tokens,
            temperature,
        }
    }
}

/// Message inside a completion choice.
///
/// `content` stays an untyped JSON value: providers may send `null` or a
/// non-string here and that has to reach the extractor unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub index: u32,
}

/// Response body from the completion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Value>,
}
