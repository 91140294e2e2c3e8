//! Handlers for the admin dashboard tabs.

use axum::extract::{Path, Query, State};
use axum::Json;
use kdmip_core::dashboard::{self, AdminOverview};
use kdmip_core::document::{self, Document, DocumentFilter};
use kdmip_core::error::CoreError;
use kdmip_core::filter::Listing;
use kdmip_core::navigation::{AdminTab, UNDER_DEVELOPMENT};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TabResponse {
    pub id: AdminTab,
    pub name: &'static str,
    pub placeholder: bool,
    /// Set for tabs with no content yet.
    pub message: Option<&'static str>,
}

/// GET /api/v1/admin/overview
pub async fn overview(RequireAdmin(_admin): RequireAdmin) -> Json<DataResponse<AdminOverview>> {
    Json(DataResponse {
        data: dashboard::admin_overview(),
    })
}

/// GET /api/v1/admin/documents?search&category
pub async fn list_documents(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<DocumentFilter>,
) -> Json<DataResponse<Listing<Document>>> {
    Json(DataResponse {
        data: document::list(&state.catalog.documents, &filter),
    })
}

/// GET /api/v1/admin/tabs/{tab}
pub async fn get_tab(
    RequireAdmin(_admin): RequireAdmin,
    Path(tab): Path<String>,
) -> AppResult<Json<DataResponse<TabResponse>>> {
    let tab = AdminTab::parse(&tab).ok_or_else(|| CoreError::NotFound {
        entity: "Admin tab",
        id: tab.clone(),
    })?;
    let placeholder = tab.is_placeholder();

    Ok(Json(DataResponse {
        data: TabResponse {
            id: tab,
            name: tab.name(),
            placeholder,
            message: placeholder.then_some(UNDER_DEVELOPMENT),
        },
    }))
}
