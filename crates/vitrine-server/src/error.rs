//! API error type and HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use vitrine_model::ValidationError;
use vitrine_render::{ArchiveError, RenderError};
use vitrine_store::StoreError;

/// Application-level error for route handlers. All handlers return
/// `Result<T, ApiError>`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No document with the requested id.
    #[error("Project not found: {0}")]
    NotFound(String),

    /// Path id and body id disagree on update.
    #[error("Mismatched ids")]
    IdMismatch,

    /// Document fails model validation.
    #[error("Invalid document: {0}")]
    Invalid(#[from] ValidationError),

    /// Store operation failed for a reason other than a missing document.
    #[error("Store error: {0}")]
    Store(StoreError),

    /// Bundle rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Zip packaging failed.
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Writing a published site to disk failed.
    #[error("Publish error: {0}")]
    Publish(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IdMismatch => StatusCode::BAD_REQUEST,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) | Self::Render(_) | Self::Archive(_) | Self::Publish(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
