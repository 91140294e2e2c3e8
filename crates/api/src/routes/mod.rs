pub mod admin;
pub mod auth;
pub mod health;
pub mod portal;
pub mod uploads;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                                  WebSocket (upload events for admin sessions)
///
/// /navigation                          views, admin tabs, quick links
/// /home                                quick stats, recent activity
/// /search                              global search
/// /filters                             filter option lists for every page
/// /notices                             notices panel
/// /circulars                           events & circulars tabs
/// /calendar                            academic calendar
/// /messages                            HOI messages
/// /messages/{id}                       one message
/// /directory                           staff directory
/// /reports                             reports & manuals
///
/// /auth/login                          user gate (public)
/// /auth/admin/login                    admin gate (public)
/// /auth/logout                         logout (requires auth)
///
/// /admin/overview                      stats, recent admin activity (admin only)
/// /admin/documents                     document management
/// /admin/tabs/{tab}                    tab metadata, placeholder tabs
/// /admin/uploads                       queue + draft, admit, teardown
/// /admin/uploads/draft                 title/description/category (PUT)
/// /admin/uploads/publish               publish batch (POST)
/// /admin/uploads/categories            upload categories
/// /admin/uploads/{id}                  remove one (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        // Public pages.
        .merge(portal::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/admin/uploads", uploads::router())
}
