//! API error taxonomy and HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the read endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Profile lookup missed.
    #[error("employee not found")]
    NotFound,

    /// Missing or out-of-range request parameter.
    #[error("{0}")]
    BadRequest(String),

    /// Storage connection or query failure.
    #[error("storage error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Database(e) => {
                // Log the underlying failure server-side; the client only
                // ever sees a generic message.
                error!("storage error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "storage error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
