//! OpenAPI specification for the sentiment API
//!
//! Aggregates all endpoints and schemas into a single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    routes::health::{HealthResponse, HealthStatus},
    sentiment::{Sentiment, SentimentRequest, SentimentResponse, SentimentTypesResponse},
};

/// OpenAPI specification for the sentiment API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sentiment Analysis API",
        version = "1.0.0",
        description = "REST API for sentiment analysis of answers to questions, backed by an LLM completion endpoint"
    ),
    paths(
        crate::routes::sentiment::analyze_sentiment,
        crate::routes::sentiment::sentiment_types,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            Sentiment,
            SentimentRequest,
            SentimentResponse,
            SentimentTypesResponse,
            ErrorResponse,
            HealthStatus,
            HealthResponse,
        )
    ),
    tags(
        (name = "Sentiment", description = "Sentiment analysis endpoints"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
