//! Application error type shared by services, repositories and handlers.
//!
//! Every failure of the link lifecycle is one of four kinds. The HTTP layer
//! maps them to status codes and a `{"message": ...}` body, logging the
//! cause exactly once on the way out.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::timestamp::TimestampParseError;
use crate::utils::url_validator::InvalidUrl;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL, malformed request body or missing required field.
    #[error("{0}")]
    Validation(String),

    /// The short code does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The underlying store failed.
    #[error("store error: {0}")]
    Store(String),

    /// A persisted timestamp could not be parsed. Indicates corrupted data.
    #[error("invalid date: {0}")]
    DateParse(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    pub fn date_parse(message: impl Into<String>) -> Self {
        Self::DateParse(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::DateParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Validation(_) | AppError::NotFound(_) => {
                tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
            }
            AppError::Store(_) | AppError::DateParse(_) => {
                tracing::error!(status = status.as_u16(), error = %self, "Request failed");
            }
        }

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::store(format!("short code collision: {}", db.message()));
        }

        AppError::store(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "invalid request".to_string());

        AppError::bad_request(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("invalid request: {}", rejection.body_text()))
    }
}

impl From<InvalidUrl> for AppError {
    fn from(e: InvalidUrl) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl From<TimestampParseError> for AppError {
    fn from(e: TimestampParseError) -> Self {
        AppError::date_parse(e.to_string())
    }
}
