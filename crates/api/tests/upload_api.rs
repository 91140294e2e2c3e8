//! HTTP-level integration tests for the admin upload queue.
//!
//! Test config uses a 100 ms tick and a 600 ms deadline; the clock is paused
//! so sleeps advance instantly.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, delete_auth, get_auth, post_auth, post_json_auth,
    put_json_auth,
};

const PAST_DEADLINE: Duration = Duration::from_millis(700);

fn files(names: &[&str]) -> serde_json::Value {
    let files: Vec<_> = names
        .iter()
        .map(|name| serde_json::json!({ "name": name, "size_bytes": 1536, "type": "application/pdf" }))
        .collect();
    serde_json::json!({ "files": files })
}

async fn queue(app: axum::Router, token: &str) -> serde_json::Value {
    let response = get_auth(app, "/api/v1/admin/uploads", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Admission
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn admit_returns_201_with_uploading_files() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;

    let response = post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf"]), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let file = &json["data"][0];
    assert_eq!(file["status"], "uploading");
    assert_eq!(file["progress"], 0.0);
    assert_eq!(file["size"], "1.5 KB");
    assert_eq!(file["category"], "circular");
    assert!(file["id"].is_string());
}

/// Every clone of the app state drives the same queue.
#[tokio::test(start_paused = true)]
async fn state_clones_share_one_queue() {
    let state = common::test_state();
    let app = common::build_test_app_with(state.clone());
    let token = admin_token(app.clone()).await;

    post_json_auth(app, "/api/v1/admin/uploads", files(&["a.pdf", "b.pdf"]), &token).await;

    let queue = state.uploads.snapshot().await;
    assert_eq!(queue.files.len(), 2);
    assert_eq!(state.uploads.active_timers().await, 2);
    state.uploads.shutdown();
}

#[tokio::test(start_paused = true)]
async fn unsupported_extension_is_admitted_in_error_state() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;

    let response = post_json_auth(app, "/api/v1/admin/uploads", files(&["virus.exe"]), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["status"], "error");
    assert!(json["data"][0]["error"].is_string());
}

#[tokio::test(start_paused = true)]
async fn empty_batch_returns_400() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;

    let response = post_json_auth(app, "/api/v1/admin/uploads", files(&[]), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test(start_paused = true)]
async fn upload_routes_require_admin() {
    let app = build_test_app();
    let token = common::user_token(app.clone()).await;

    let response = post_json_auth(app, "/api/v1/admin/uploads", files(&["a.pdf"]), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn files_complete_by_deadline() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf", "b.docx"]), &token).await;

    tokio::time::sleep(PAST_DEADLINE).await;

    let queue = queue(app, &token).await;
    for file in queue["files"].as_array().unwrap() {
        assert_eq!(file["status"], "completed");
        assert_eq!(file["progress"], 100.0);
    }
}

// ---------------------------------------------------------------------------
// Removal & teardown
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn remove_mid_progress() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    let response = post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf", "b.pdf"]), &token).await;
    let admitted = body_json(response).await;
    let id = admitted["data"][0]["id"].as_str().unwrap().to_string();

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/uploads/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    tokio::time::sleep(PAST_DEADLINE).await;

    let queue = queue(app.clone(), &token).await;
    let remaining = queue["files"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["name"], "b.pdf");

    let response = delete_auth(app, &format!("/api/v1/admin/uploads/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn teardown_clears_queue_but_keeps_draft() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    let draft = serde_json::json!({ "title": "Drill notice", "description": "", "category": "safety" });
    put_json_auth(app.clone(), "/api/v1/admin/uploads/draft", draft, &token).await;
    post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf"]), &token).await;

    let response = delete_auth(app.clone(), "/api/v1/admin/uploads", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let queue = queue(app, &token).await;
    assert!(queue["files"].as_array().unwrap().is_empty());
    assert_eq!(queue["draft"]["title"], "Drill notice");
    assert_eq!(queue["draft"]["category"], "safety");
}

// ---------------------------------------------------------------------------
// Publish
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn publish_requires_title() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf"]), &token).await;
    tokio::time::sleep(PAST_DEADLINE).await;

    let response = post_auth(app, "/api/v1/admin/uploads/publish", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Document title is required");
}

#[tokio::test(start_paused = true)]
async fn publish_requires_completed_file() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    let draft = serde_json::json!({ "title": "Quarterly report" });
    put_json_auth(app.clone(), "/api/v1/admin/uploads/draft", draft, &token).await;
    post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf"]), &token).await;

    let response = post_auth(app, "/api/v1/admin/uploads/publish", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "At least one completed file is required"
    );
}

#[tokio::test(start_paused = true)]
async fn publish_hands_off_completed_files_and_resets_form() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;
    let draft = serde_json::json!({
        "title": "Quarterly report",
        "description": "Q1 figures",
        "category": "report",
    });
    let response = put_json_auth(app.clone(), "/api/v1/admin/uploads/draft", draft, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    post_json_auth(app.clone(), "/api/v1/admin/uploads", files(&["a.pdf", "notes.txt"]), &token).await;
    tokio::time::sleep(PAST_DEADLINE).await;

    let response = post_auth(app.clone(), "/api/v1/admin/uploads/publish", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Quarterly report");
    assert_eq!(json["data"]["category"], "report");
    let published = json["data"]["files"].as_array().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0]["name"], "a.pdf");

    let queue = queue(app, &token).await;
    assert!(queue["files"].as_array().unwrap().is_empty());
    assert_eq!(queue["draft"]["title"], "");
    assert_eq!(queue["draft"]["category"], "circular");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn categories_lists_six_with_labels() {
    let app = build_test_app();
    let token = admin_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/admin/uploads/categories", &token).await;
    let json = body_json(response).await;
    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["value"], "circular");
    assert_eq!(categories[4]["label"], "Safety Document");
}
