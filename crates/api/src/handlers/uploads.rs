//! Handlers for the admin upload queue.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kdmip_core::upload::{
    self, CategoryEntry, Draft, FileDescriptor, PublishBatch, UploadCategory, UploadedFile,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::UploadQueue;

/// Request body for `POST /admin/uploads`.
#[derive(Debug, Deserialize)]
pub struct AdmitRequest {
    pub files: Vec<FileDescriptor>,
    /// Defaults to the draft's category.
    pub category: Option<UploadCategory>,
}

/// GET /api/v1/admin/uploads
pub async fn get_queue(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<DataResponse<UploadQueue>> {
    Json(DataResponse {
        data: state.uploads.snapshot().await,
    })
}

/// POST /api/v1/admin/uploads
///
/// Files with an unaccepted extension come back in the `error` state; the
/// rest start uploading.
pub async fn admit(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<AdmitRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<UploadedFile>>>)> {
    if input.files.is_empty() {
        return Err(AppError::BadRequest("files cannot be empty".to_string()));
    }
    let admitted = state
        .uploads
        .admit(input.files, input.category, &admin.subject)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: admitted })))
}

/// DELETE /api/v1/admin/uploads
pub async fn clear(RequireAdmin(admin): RequireAdmin, State(state): State<AppState>) -> StatusCode {
    state.uploads.clear(&admin.subject).await;
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/admin/uploads/{id}
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.uploads.remove(&id, &admin.subject).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/uploads/draft
pub async fn update_draft(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<Draft>,
) -> Json<DataResponse<Draft>> {
    Json(DataResponse {
        data: state.uploads.update_draft(draft).await,
    })
}

/// POST /api/v1/admin/uploads/publish
pub async fn publish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PublishBatch>>> {
    let batch = state.uploads.publish(&admin.subject).await?;
    Ok(Json(DataResponse { data: batch }))
}

/// GET /api/v1/admin/uploads/categories
pub async fn categories(RequireAdmin(_admin): RequireAdmin) -> Json<DataResponse<Vec<CategoryEntry>>> {
    Json(DataResponse {
        data: upload::categories(),
    })
}
