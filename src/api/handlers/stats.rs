//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::StatsResponse;
use crate::api::handlers::links::require_code;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link with its access count. Does not count as an access.
///
/// # Endpoint
///
/// `GET /shorten/{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://www.example.com",
///   "shortCode": "abc123",
///   "createdAt": "2024-05-01T10:00:00.000Z",
///   "updatedAt": "2024-05-02T08:30:00.000Z",
///   "accessCount": 10
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is blank.
/// Returns 404 Not Found if the code does not exist.
/// Returns 500 Internal Server Error on store failure or corrupted data.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let code = require_code(&code)?;

    let stats = state.link_service.get_stats(code).await?;

    Ok(Json(stats.into()))
}
