use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::io;
use thiserror::Error;
use tracing::error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The scorer produced something it should not have, or failed unexpectedly.
    #[error("{0}")]
    Processing(String),

    /// A value failed `validator` checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors (bind, accept).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Error: {}", self);
        let body = ErrorBody {
            detail: format!("Processing error: {}", self),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
