//! HTTP API for Wish Oracle
//!
//! Endpoints:
//! - GET  /health   - Health check
//! - POST /evaluate - Evaluate raw text
//! - POST /reading  - Validate and evaluate a wish with its interpretations
//! - POST /keywords - Image keywords for a wish

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{EvaluationPipeline, KeywordPicker};
use crate::types::{Reading, ReadingError, ReadingOutput};

/// App state
#[derive(Debug, Default)]
pub struct AppState {
    pub pipeline: EvaluationPipeline,
    pub picker: KeywordPicker,
}

/// Evaluate request
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub text: String,
}

/// Reading request
#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub wish: String,
    pub interpretations: Vec<String>,
}

/// Keywords request
#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub wish: String,
}

/// Keywords response
#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub image_keywords: Vec<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body for rejected input
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Rejected reading, rendered as 400 with a JSON body
pub struct ApiError(ReadingError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.0.to_string() };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<ReadingError> for ApiError {
    fn from(err: ReadingError) -> Self {
        Self(err)
    }
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/health", get(health))
        .route("/evaluate", post(evaluate_text))
        .route("/reading", post(evaluate_reading))
        .route("/keywords", post(keywords))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Evaluate raw text
async fn evaluate_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Json<ReadingOutput> {
    let result = state.pipeline.evaluate(&req.text);
    Json(ReadingOutput::new(result))
}

/// Validate and evaluate a reading
async fn evaluate_reading(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReadingRequest>,
) -> Result<Json<ReadingOutput>, ApiError> {
    let reading = Reading::new(&req.wish, req.interpretations.as_slice()).map_err(|err| {
        warn!(%err, "reading rejected");
        err
    })?;
    let result = state.pipeline.evaluate_reading(&reading);
    Ok(Json(ReadingOutput::new(result)))
}

/// Image keywords for a wish
async fn keywords(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    Json(KeywordsResponse {
        keywords: state.picker.choose(&req.wish),
        image_keywords: state.picker.image_keywords(&req.wish),
    })
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Wish Oracle API running");
    info!("  GET  /health    - Health check");
    info!("  POST /evaluate  - Evaluate text");
    info!("  POST /reading   - Evaluate wish + interpretations");
    info!("  POST /keywords  - Image keywords");
    axum::serve(listener, router).await?;
    Ok(())
}
