//! LLM completion integration
//!
//! Provides the client and wire types for the remote completion endpoint.

pub mod client;
pub mod models;

pub use client::{CompletionProvider, LlmClient, LlmError};
pub use models::{CompletionRequest, CompletionResponse, Message, Role};
