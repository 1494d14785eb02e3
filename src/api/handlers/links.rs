//! Handlers for operations on an existing short code (resolve, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Rejects blank short codes before any service call.
pub(crate) fn require_code(code: &str) -> Result<&str, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::bad_request("code is required"));
    }
    Ok(code)
}

/// Returns the link behind a short code and counts the access.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank.
/// Returns 404 Not Found if the code does not exist.
/// Returns 500 Internal Server Error on store failure or corrupted data.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let code = require_code(&code)?;

    let link = state.link_service.resolve(code).await?;

    Ok(Json(link.into()))
}

/// Points a short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/new/destination" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank, the body is malformed or
/// the URL is invalid.
/// Returns 404 Not Found if the code does not exist.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let code = require_code(&code)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.update_link(code, payload.url).await?;

    Ok(Json(link.into()))
}

/// Deletes a short code permanently.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank.
/// Returns 404 Not Found if the code does not exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let code = require_code(&code)?;

    state.link_service.delete_link(code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Answers requests to `/shorten/` that carry no code at all.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("code is required")
}
