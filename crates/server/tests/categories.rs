use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{create_router, repositories::InMemoryCategoryRepository, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Arc::new(InMemoryCategoryRepository::new()));
    create_router(state).0
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn patch_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_category(app: &Router, name: &str) -> Value {
    let response = send(app, post_json("/categories", json!({ "name": name }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn health_reports_service_up() {
    let app = app();

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "stock-service up");
}

#[tokio::test]
async fn create_returns_created_category() {
    let app = app();

    let body = create_category(&app, "Electronics").await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Electronics");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_empty_name_is_rejected_before_the_store() {
    let app = app();

    let response = send(&app, post_json("/categories", json!({ "name": "" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "category name cannot be empty");

    // Nothing was persisted
    let response = send(&app, get("/categories")).await;
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_with_malformed_body_is_rejected() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/categories")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request payload");
}

#[tokio::test]
async fn list_on_empty_store_is_an_empty_array() {
    let app = app();

    let response = send(&app, get("/categories")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn get_with_non_integer_id_is_rejected() {
    let app = app();

    let response = send(&app, get("/categories/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid ID format");
}

#[tokio::test]
async fn get_on_missing_id_is_not_found() {
    let app = app();

    let response = send(&app, get("/categories/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "category not found");
}

#[tokio::test]
async fn created_category_round_trips_through_get() {
    let app = app();

    let created = create_category(&app, "Electronics").await;
    let id = created["id"].as_i64().unwrap();

    let response = send(&app, get(&format!("/categories/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Electronics");
    assert_eq!(body["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn update_renames_and_returns_no_content() {
    let app = app();

    let created = create_category(&app, "Electronics").await;
    let id = created["id"].as_i64().unwrap();

    let response = send(
        &app,
        patch_json(&format!("/categories/{}", id), json!({ "name": "New" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, get(&format!("/categories/{}", id))).await;
    let body = body_json(response).await;
    assert_eq!(body["name"], "New");
    // Renaming must not clobber the creation timestamp
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_with_empty_name_is_rejected() {
    let app = app();

    let created = create_category(&app, "Electronics").await;
    let id = created["id"].as_i64().unwrap();

    let response = send(
        &app,
        patch_json(&format!("/categories/{}", id), json!({ "name": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "category name cannot be empty");
}

#[tokio::test]
async fn update_with_bad_id_is_rejected_before_the_payload() {
    let app = app();

    let response = send(&app, patch_json("/categories/abc", json!({ "name": "" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid ID format");
}

#[tokio::test]
async fn update_on_missing_id_is_not_found() {
    let app = app();

    let response = send(&app, patch_json("/categories/999", json!({ "name": "New" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_category() {
    let app = app();

    let created = create_category(&app, "Electronics").await;
    let id = created["id"].as_i64().unwrap();

    let response = send(&app, delete(&format!("/categories/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, get(&format!("/categories/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_missing_id_is_not_found() {
    let app = app();

    let response = send(&app, delete("/categories/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "category not found");
}

// Drives every registered route in one flow, so a route that fails to wire
// up cannot slip past the per-scenario tests above.
#[tokio::test]
async fn every_route_is_reachable_end_to_end() {
    let app = app();

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = create_category(&app, "Electronics").await;
    let id = created["id"].as_i64().unwrap();

    let response = send(&app, get("/categories")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = send(&app, get(&format!("/categories/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        patch_json(&format!("/categories/{}", id), json!({ "name": "New" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get(&format!("/categories/{}", id))).await;
    let body = body_json(response).await;
    assert_eq!(body["name"], "New");
    assert_eq!(body["createdAt"], created["createdAt"]);

    let response = send(&app, delete(&format!("/categories/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/categories")).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn delete_with_non_integer_id_is_rejected() {
    let app = app();

    let response = send(&app, delete("/categories/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid ID format");
}
