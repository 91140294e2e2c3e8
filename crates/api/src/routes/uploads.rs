//! Route definitions for the admin upload queue.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/admin/uploads`. Every handler requires the admin role.
///
/// ```text
/// GET    /              -> get_queue
/// POST   /              -> admit
/// DELETE /              -> clear
/// PUT    /draft         -> update_draft
/// POST   /publish       -> publish
/// GET    /categories    -> categories
/// DELETE /{id}          -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(uploads::get_queue)
                .post(uploads::admit)
                .delete(uploads::clear),
        )
        .route("/draft", put(uploads::update_draft))
        .route("/publish", post(uploads::publish))
        .route("/categories", get(uploads::categories))
        .route("/{id}", delete(uploads::remove))
}
