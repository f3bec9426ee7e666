//! HTTP-facing error types.
//!
//! Store failures are translated to the nearest HTTP status here; nothing
//! is retried at this layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request handler errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No cupcake exists under the requested id
    #[error("no cupcake with id {0}")]
    NotFound(i64),

    /// Missing or malformed request body / path segment
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The storage backend failed; fatal for this request
    #[error("storage backend unavailable: {0}")]
    StorageUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound(id),
            StoreError::Unavailable(reason) => ApiError::StorageUnavailable(reason),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
