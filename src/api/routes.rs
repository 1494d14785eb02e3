//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, missing_code_handler, resolve_handler, shorten_handler, stats_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST   /shorten`               - Create a short link
/// - `GET    /shorten/{code}`        - Resolve a short link (counts an access)
/// - `PUT    /shorten/{code}`        - Change the destination URL
/// - `DELETE /shorten/{code}`        - Delete a short link
/// - `GET    /shorten/{code}/stats`  - Link with access count
///
/// `/shorten/` without a code answers 400 for GET, PUT and DELETE.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/",
            get(missing_code_handler)
                .put(missing_code_handler)
                .delete(missing_code_handler),
        )
        .route(
            "/shorten/{code}",
            get(resolve_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/shorten/{code}/stats", get(stats_handler))
}
