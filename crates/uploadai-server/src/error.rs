//! HTTP error mapping
//!
//! Every handler returns `ApiError`, rendered as `{"error": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use uploadai::DomainError;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) | DomainError::Precondition(_) => StatusCode::BAD_REQUEST,
            DomainError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            DomainError::Repository(_) | DomainError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Validation messages are already user-facing
        let message = match err {
            DomainError::Validation(msg) => msg,
            other => other.to_string(),
        };

        Self { status, message }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(status = %self.status, "{}", self.message);
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
