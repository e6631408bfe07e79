//! HTTP error type and its mapping to status codes.

use crate::utils::error::{ErrorCategory, TierError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Malformed body or a spec that fails validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<TierError> for HttpError {
    fn from(err: TierError) -> Self {
        match err.category() {
            ErrorCategory::Input => HttpError::BadRequest(err.to_string()),
            ErrorCategory::Configuration | ErrorCategory::System => {
                HttpError::Internal(err.to_string())
            }
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for HttpError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}
