//! HTTP-level integration tests for the public pages.
//!
//! Every listing must return the `{ "data": ... }` envelope and an explicit
//! `empty_state` when nothing matches.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Navigation & home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn navigation_lists_views_tabs_and_links() {
    let response = get(build_test_app(), "/api/v1/navigation").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let views = json["data"]["views"].as_array().unwrap();
    assert_eq!(views.len(), 6);
    assert_eq!(views[5]["id"], "admin");
    assert_eq!(views[5]["requires_role"], "admin");
    assert_eq!(json["data"]["admin_tabs"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"]["quick_links"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn home_returns_stats_and_activity() {
    let json = body_json(get(build_test_app(), "/api/v1/home").await).await;

    assert!(!json["data"]["quick_stats"].as_array().unwrap().is_empty());
    assert!(!json["data"]["recent_activity"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn filters_lists_option_values() {
    let json = body_json(get(build_test_app(), "/api/v1/filters").await).await;

    assert_eq!(json["data"]["notices"]["categories"][0], "all");
    assert_eq!(json["data"]["circulars"]["tabs"][0]["count"], 5);
    assert_eq!(json["data"]["calendar"]["views"][1], "this-week");
    assert_eq!(json["data"]["reports"]["types"][1]["value"], "technical");
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notices_unfiltered_returns_all() {
    let json = body_json(get(build_test_app(), "/api/v1/notices").await).await;

    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["total"], 5);
    assert!(json["data"]["empty_state"].is_null());
}

#[tokio::test]
async fn notices_search_is_case_insensitive() {
    let json = body_json(get(build_test_app(), "/api/v1/notices?search=CONFERENCE%20HALL").await).await;

    assert_eq!(ids(&json), vec!["4"]);
}

#[tokio::test]
async fn notices_no_match_returns_empty_state() {
    let uri = "/api/v1/notices?category=Training&status=urgent";
    let json = body_json(get(build_test_app(), uri).await).await;

    assert!(json["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["empty_state"]["title"], "No notices found");
}

// ---------------------------------------------------------------------------
// Circulars
// ---------------------------------------------------------------------------

#[tokio::test]
async fn circulars_notices_tab() {
    let json = body_json(get(build_test_app(), "/api/v1/circulars?tab=notices").await).await;

    assert_eq!(json["data"]["active_tab"], "notices");
    assert_eq!(ids(&json), vec!["3", "5"]);
    assert_eq!(json["data"]["tabs"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn circulars_unknown_tab_falls_back_to_all() {
    let json = body_json(get(build_test_app(), "/api/v1/circulars?tab=archive").await).await;

    assert_eq!(json["data"]["active_tab"], "all");
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[tokio::test]
async fn calendar_this_week_window() {
    let uri = "/api/v1/calendar?view=this-week&as_of=2025-01-21";
    let json = body_json(get(build_test_app(), uri).await).await;

    assert_eq!(json["data"]["view"], "this-week");
    assert_eq!(json["data"]["as_of"], "2025-01-21");
    assert_eq!(ids(&json), vec!["1", "2"]);
}

#[tokio::test]
async fn calendar_past_everything_is_empty() {
    let uri = "/api/v1/calendar?as_of=2030-01-01";
    let json = body_json(get(build_test_app(), uri).await).await;

    assert_eq!(json["data"]["view"], "upcoming");
    assert_eq!(json["data"]["empty_state"]["title"], "No events found");
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn messages_filter_by_category() {
    let json = body_json(get(build_test_app(), "/api/v1/messages?category=announcement").await).await;

    assert_eq!(ids(&json), vec!["3", "5"]);
}

#[tokio::test]
async fn message_detail_and_not_found() {
    let app = build_test_app();

    let response = get(app.clone(), "/api/v1/messages/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "1");
    assert!(json["data"]["content"].is_string());

    let response = get(app, "/api/v1/messages/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Message with id 999 not found");
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn directory_search_by_department() {
    let json = body_json(get(build_test_app(), "/api/v1/directory?search=geophysics").await).await;

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Dr. Sunita Verma");
}

#[tokio::test]
async fn directory_unknown_department_is_empty_not_error() {
    let response = get(build_test_app(), "/api/v1/directory?department=Astronomy").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["empty_state"]["title"], "No staff members found");
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reports_sorted_by_downloads() {
    let json = body_json(get(build_test_app(), "/api/v1/reports?sort=downloads").await).await;

    assert_eq!(json["data"]["sort"], "downloads");
    assert_eq!(ids(&json), vec!["2", "4", "1", "3", "5"]);
}

#[tokio::test]
async fn reports_type_and_sort_combine() {
    let uri = "/api/v1/reports?type=technical&sort=downloads";
    let json = body_json(get(build_test_app(), uri).await).await;

    assert_eq!(ids(&json), vec!["2", "5"]);
}

// ---------------------------------------------------------------------------
// Global search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_spans_sections() {
    let json = body_json(get(build_test_app(), "/api/v1/search?q=safety").await).await;

    assert_eq!(json["data"]["query"], "safety");
    assert!(json["data"]["total"].as_u64().unwrap() > 0);
    assert!(!json["data"]["notices"].as_array().unwrap().is_empty());
    assert!(json["data"]["empty_state"].is_null());
}

#[tokio::test]
async fn blank_search_returns_empty_state() {
    let json = body_json(get(build_test_app(), "/api/v1/search?q=").await).await;

    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["empty_state"]["title"], "No results found");
}
