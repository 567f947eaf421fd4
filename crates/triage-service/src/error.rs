//! HTTP error mapping for the triage routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Symptoms are required")]
    SymptomsRequired,
    #[error("Symptoms cannot be empty")]
    EmptySymptoms,
    #[error("assessment failed: {0}")]
    Assessment(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::SymptomsRequired | ApiError::EmptySymptoms => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Assessment(detail) => {
                tracing::error!(detail, "triage assessment error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred during assessment".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
