//! Handlers for the public pages.
//!
//! Every listing goes through the shared filter engine in
//! [`kdmip_core::filter`] and reports an explicit empty state when nothing
//! matches. Filter values never fail: unknown values match nothing, and
//! `all` or blank values are no constraint.

use axum::extract::{Path, Query, State};
use axum::Json;
use kdmip_core::calendar::{self, CalendarPage, CalendarQuery, CalendarView};
use kdmip_core::circular::{self, CircularFilter, CircularPage, CIRCULAR_CATEGORIES, CIRCULAR_STATUSES};
use kdmip_core::dashboard::{self, HomeDashboard};
use kdmip_core::directory::{self, DirectoryFilter, Person, DEPARTMENTS, STAFF_CATEGORIES};
use kdmip_core::document::DOCUMENT_CATEGORIES;
use kdmip_core::filter::Listing;
use kdmip_core::message::{self, Message, MessageFilter, MESSAGE_CATEGORIES};
use kdmip_core::navigation::{self, Navigation};
use kdmip_core::notice::{self, Notice, NoticeFilter, NOTICE_CATEGORIES, NOTICE_STATUSES};
use kdmip_core::report::{self, ReportFilter, ReportPage, REPORT_CATEGORIES, REPORT_TYPES};
use kdmip_core::search::{self, SearchQuery, SearchResults};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/navigation
pub async fn navigation() -> Json<DataResponse<Navigation>> {
    Json(DataResponse {
        data: navigation::navigation(),
    })
}

/// GET /api/v1/home
pub async fn home() -> Json<DataResponse<HomeDashboard>> {
    Json(DataResponse {
        data: dashboard::home(),
    })
}

/// GET /api/v1/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<DataResponse<SearchResults>> {
    let results = search::search(&state.catalog, &query);
    tracing::debug!(query = %results.query, total = results.total, "Global search");
    Json(DataResponse { data: results })
}

/// GET /api/v1/filters
///
/// Option lists for every filter control, so clients need not hard-code
/// them.
pub async fn filters(State(state): State<AppState>) -> Json<DataResponse<serde_json::Value>> {
    let views = [CalendarView::Upcoming, CalendarView::ThisWeek, CalendarView::ThisMonth];
    let data = serde_json::json!({
        "notices": {
            "categories": NOTICE_CATEGORIES,
            "statuses": NOTICE_STATUSES,
        },
        "circulars": {
            "tabs": circular::tab_counts(&state.catalog.circulars),
            "categories": CIRCULAR_CATEGORIES,
            "statuses": CIRCULAR_STATUSES,
        },
        "calendar": { "views": views },
        "messages": { "categories": MESSAGE_CATEGORIES },
        "directory": {
            "categories": STAFF_CATEGORIES,
            "departments": DEPARTMENTS,
        },
        "reports": {
            "types": REPORT_TYPES,
            "categories": REPORT_CATEGORIES,
            "sorts": ["date", "title", "downloads"],
        },
        "documents": { "categories": DOCUMENT_CATEGORIES },
    });
    Json(DataResponse { data })
}

/// GET /api/v1/notices?search&category&status
pub async fn list_notices(
    State(state): State<AppState>,
    Query(filter): Query<NoticeFilter>,
) -> Json<DataResponse<Listing<Notice>>> {
    Json(DataResponse {
        data: notice::list(&state.catalog.notices, &filter),
    })
}

/// GET /api/v1/circulars?tab&search&category&status
pub async fn list_circulars(
    State(state): State<AppState>,
    Query(filter): Query<CircularFilter>,
) -> Json<DataResponse<CircularPage>> {
    Json(DataResponse {
        data: circular::list(&state.catalog.circulars, &filter),
    })
}

/// GET /api/v1/calendar?view&as_of
///
/// `as_of` defaults to today (UTC).
pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<DataResponse<CalendarPage>> {
    let view = CalendarView::parse(query.view.as_deref());
    let today = query
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    Json(DataResponse {
        data: calendar::list(&state.catalog.events, view, today),
    })
}

/// GET /api/v1/messages?search&category
pub async fn list_messages(
    State(state): State<AppState>,
    Query(filter): Query<MessageFilter>,
) -> Json<DataResponse<Listing<Message>>> {
    Json(DataResponse {
        data: message::list(&state.catalog.messages, &filter),
    })
}

/// GET /api/v1/messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Message>>> {
    let message = message::find(&state.catalog.messages, &id)?;
    Ok(Json(DataResponse { data: message }))
}

/// GET /api/v1/directory?search&category&department
pub async fn list_directory(
    State(state): State<AppState>,
    Query(filter): Query<DirectoryFilter>,
) -> Json<DataResponse<Listing<Person>>> {
    Json(DataResponse {
        data: directory::list(&state.catalog.people, &filter),
    })
}

/// GET /api/v1/reports?search&type&category&sort
pub async fn list_reports(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> Json<DataResponse<ReportPage>> {
    Json(DataResponse {
        data: report::list(&state.catalog.reports, &filter),
    })
}
