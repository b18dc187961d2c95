//! Sentiment classification
//!
//! Prompt construction, model output interpretation and the service that
//! ties them to a completion provider.

pub mod extract;
pub mod prompt;
pub mod request;
pub mod response;
pub mod service;
pub mod types;

pub use extract::{ExtractionError, ExtractionResult};
pub use request::{SentimentRequest, ValidationError};
pub use response::{SentimentResponse, SentimentTypesResponse};
pub use service::SentimentService;
pub use types::Sentiment;
