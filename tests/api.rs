use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Local;
use click_me::errors::StoreError;
use click_me::models::DailyCount;
use click_me::{router, AppState, ClickStore, FileStore};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn temp_data_path(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("click_me_api_{tag}_{}_{nanos}.json", std::process::id()));
    path
}

async fn fresh_app(tag: &str) -> Router {
    let store = FileStore::open(temp_data_path(tag)).await.expect("open store");
    router(AppState::new(
        Arc::new(store),
        PathBuf::from("missing/click.mp3"),
    ))
}

fn get_clicks() -> Request<Body> {
    Request::builder()
        .uri("/api/clicks")
        .body(Body::empty())
        .unwrap()
}

fn post_click() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/clicks")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn today() -> String {
    Local::now().date_naive().to_string()
}

#[tokio::test]
async fn fresh_store_reports_zero() {
    let app = fresh_app("zero").await;

    let response = app.oneshot(get_clicks()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "count": 0 }));
}

#[tokio::test]
async fn clicks_count_up_from_an_empty_store() {
    let app = fresh_app("scenario").await;

    let response = app.clone().oneshot(post_click()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["date"], today());
    assert_eq!(body["count"], 1);

    let response = app.clone().oneshot(get_clicks()).await.unwrap();
    assert_eq!(body_json(response).await, serde_json::json!({ "count": 1 }));

    let response = app.oneshot(post_click()).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["date"], today());
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn get_never_mutates_the_count() {
    let app = fresh_app("readonly").await;

    for _ in 0..3 {
        let response = app.clone().oneshot(get_clicks()).await.unwrap();
        assert_eq!(body_json(response).await["count"], 0);
    }

    app.clone().oneshot(post_click()).await.unwrap();
    for _ in 0..3 {
        let response = app.clone().oneshot(get_clicks()).await.unwrap();
        assert_eq!(body_json(response).await["count"], 1);
    }
}

struct FailingStore;

#[async_trait]
impl ClickStore for FailingStore {
    async fn count_for(&self, _date: &str) -> Result<Option<DailyCount>, StoreError> {
        Err(StoreError::Io(std::io::Error::other("backend offline")))
    }

    async fn increment(&self, _date: &str) -> Result<DailyCount, StoreError> {
        Err(StoreError::Io(std::io::Error::other("backend offline")))
    }
}

fn failing_app() -> Router {
    router(AppState::new(
        Arc::new(FailingStore),
        PathBuf::from("missing/click.mp3"),
    ))
}

#[tokio::test]
async fn storage_failure_on_lookup_is_a_generic_500() {
    let response = failing_app().oneshot(get_clicks()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Failed to get click count" })
    );
}

#[tokio::test]
async fn storage_failure_on_update_is_a_generic_500() {
    let response = failing_app().oneshot(post_click()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Failed to update click count" })
    );
}

#[tokio::test]
async fn index_serves_the_button_page() {
    let app = fresh_app("index").await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Click Me"));
    assert!(page.contains("/api/clicks"));
}

#[tokio::test]
async fn missing_audio_asset_is_not_found() {
    let app = fresh_app("audio").await;

    let request = Request::builder()
        .uri("/click.mp3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
