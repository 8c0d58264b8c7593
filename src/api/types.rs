//! API request and response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request to the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Ordered conversation as the frontend sees it. Only the last
    /// message's content is forwarded to the agent.
    pub messages: Vec<IncomingMessage>,

    /// Optional session key. Callers that omit it share one
    /// conversation thread.
    #[serde(default)]
    pub session: Option<String>,
}

/// A single message in the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub role: String,
    pub content: String,
}

/// Response from the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The agent's final reply text
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// JSON error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("messages list is empty")]
    EmptyMessages,

    #[error(transparent)]
    Agent(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmptyMessages => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Agent(e) => {
                tracing::error!("Agent invocation failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
