//! Sentiment Analysis API
//!
//! Classifies the sentiment of an answer to a question by prompting a remote
//! LLM completion endpoint and mapping whatever it returns onto one of three
//! labels: `Positif`, `Negatif` or `Netral`.

pub mod config;
pub mod docs;
pub mod error;
pub mod llm;
pub mod routes;
pub mod sentiment;
pub mod telemetry;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::llm::{CompletionProvider, LlmClient};
pub use crate::sentiment::{Sentiment, SentimentService};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    pub sentiment_service: Arc<SentimentService>,
}

impl AppState {
    /// Create a new application state backed by the configured LLM endpoint
    pub fn new(config: Config) -> Result<Self> {
        // Connection pooling only; the per-call timeout is applied by the client
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(16)
            .build()?;

        let provider: Arc<dyn CompletionProvider> = Arc::new(LlmClient::new(http_client, &config)?);

        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an arbitrary completion provider
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let sentiment_service = Arc::new(SentimentService::new(provider, config.llm_model.clone()));

        Self {
            config,
            start_time: Instant::now(),
            sentiment_service,
        }
    }
}
