//! Route definitions for the public pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::portal;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET /navigation      -> navigation
/// GET /home            -> home
/// GET /search          -> search
/// GET /filters         -> filters
/// GET /notices         -> list_notices
/// GET /circulars       -> list_circulars
/// GET /calendar        -> calendar
/// GET /messages        -> list_messages
/// GET /messages/{id}   -> get_message
/// GET /directory       -> list_directory
/// GET /reports         -> list_reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(portal::navigation))
        .route("/home", get(portal::home))
        .route("/search", get(portal::search))
        .route("/filters", get(portal::filters))
        .route("/notices", get(portal::list_notices))
        .route("/circulars", get(portal::list_circulars))
        .route("/calendar", get(portal::calendar))
        .route("/messages", get(portal::list_messages))
        .route("/messages/{id}", get(portal::get_message))
        .route("/directory", get(portal::list_directory))
        .route("/reports", get(portal::list_reports))
}
