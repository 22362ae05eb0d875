//! End-to-end tests for the annotation REST API

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use marginalia_server::config::Config;
use marginalia_server::db;
use marginalia_server::routes;
use marginalia_server::state::AppState;

async fn test_server() -> (TestServer, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", dir.path().join("test.db").display());

    let pool = db::create_pool(&db_url).await.unwrap();
    let state = AppState::new(Config::default(), pool);
    let server = TestServer::new(routes::app(state)).unwrap();
    (server, dir)
}

fn user_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_static("user-1"),
    )
}

fn highlight_body() -> Value {
    json!({
        "pdf_id": "pdf-1",
        "page_number": 2,
        "type": "highlight",
        "color": "#FFFF00",
        "position": { "x": 50.0, "y": 50.0, "width": 100.0, "height": 40.0 }
    })
}

#[tokio::test]
async fn test_health() {
    let (server, _dir) = test_server().await;
    let res = server.get("/health").await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_create_list_delete_lifecycle() {
    let (server, _dir) = test_server().await;
    let (name, value) = user_header();

    let res = server
        .post("/api/v1/annotations")
        .add_header(name.clone(), value.clone())
        .json(&highlight_body())
        .await;
    res.assert_status(StatusCode::CREATED);
    let created: Value = res.json();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["user_id"], "user-1");
    assert_eq!(created["type"], "highlight");
    assert_eq!(created["text_content"], "highlight annotation");
    assert_eq!(created["position"]["width"], 100.0);

    // The page the annotation targets lists it; other pages stay empty
    let res = server.get("/api/v1/annotations/document/pdf-1/page/2").await;
    res.assert_status_ok();
    let listed: Vec<Value> = res.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());

    let res = server.get("/api/v1/annotations/document/pdf-1/page/3").await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Value>>().len(), 0);

    let res = server.get("/api/v1/annotations/document/pdf-1/count").await;
    assert_eq!(res.json::<Value>()["count"], 1);

    // Delete removes it; a second delete is a failure, not a no-op
    let res = server.delete(&format!("/api/v1/annotations/{}", id)).await;
    res.assert_status(StatusCode::NO_CONTENT);

    let res = server.delete(&format!("/api/v1/annotations/{}", id)).await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server.get("/api/v1/annotations/document/pdf-1/page/2").await;
    assert_eq!(res.json::<Vec<Value>>().len(), 0);
}

#[tokio::test]
async fn test_create_requires_identity() {
    let (server, _dir) = test_server().await;

    let res = server.post("/api/v1/annotations").json(&highlight_body()).await;
    res.assert_status(StatusCode::UNAUTHORIZED);

    // Nothing was persisted
    let res = server.get("/api/v1/annotations/document/pdf-1/page/2").await;
    assert_eq!(res.json::<Vec<Value>>().len(), 0);
}

#[tokio::test]
async fn test_create_rejects_degenerate_region() {
    let (server, _dir) = test_server().await;
    let (name, value) = user_header();

    let mut body = highlight_body();
    body["position"]["height"] = json!(0.0);

    let res = server
        .post("/api/v1/annotations")
        .add_header(name, value)
        .json(&body)
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_bad_page_number() {
    let (server, _dir) = test_server().await;
    let (name, value) = user_header();

    let mut body = highlight_body();
    body["page_number"] = json!(0);

    let res = server
        .post("/api/v1/annotations")
        .add_header(name, value)
        .json(&body)
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_annotation_is_404() {
    let (server, _dir) = test_server().await;
    let res = server.get("/api/v1/annotations/no-such-id").await;
    res.assert_status(StatusCode::NOT_FOUND);
    assert!(res.json::<Value>()["error"].as_str().unwrap().contains("no-such-id"));
}

#[tokio::test]
async fn test_underline_create_round_trip() {
    let (server, _dir) = test_server().await;
    let (name, value) = user_header();

    let body = json!({
        "pdf_id": "pdf-9",
        "page_number": 1,
        "type": "underline",
        "color": "#0000FF",
        "position": { "x": 10.0, "y": 20.0, "width": 80.0, "height": 12.0 }
    });

    let res = server
        .post("/api/v1/annotations")
        .add_header(name, value)
        .json(&body)
        .await;
    res.assert_status(StatusCode::CREATED);
    let created: Value = res.json();
    assert_eq!(created["type"], "underline");
    assert_eq!(created["text_content"], "underline annotation");

    let res = server
        .get(&format!("/api/v1/annotations/{}", created["id"].as_str().unwrap()))
        .await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>()["color"], "#0000FF");
}
