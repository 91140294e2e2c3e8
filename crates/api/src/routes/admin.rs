//! Route definitions for the admin dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the admin role.
///
/// ```text
/// GET /overview      -> overview
/// GET /documents     -> list_documents
/// GET /tabs/{tab}    -> get_tab
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(admin::overview))
        .route("/documents", get(admin::list_documents))
        .route("/tabs/{tab}", get(admin::get_tab))
}
