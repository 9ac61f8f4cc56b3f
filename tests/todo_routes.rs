use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use todo_server::{
    routes::{API_PREFIX, app},
    test_helpers::{test_router, test_state},
};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

fn json_request(method: &str, path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(api_path(path))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: &str, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(api_path(path))
        .body(Body::empty())
        .expect("request should build")
}

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = json_response(test_router(), empty_request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ok"], true);
}

#[tokio::test]
async fn todo_lifecycle_over_http() {
    let app = test_router();

    let (status, created) = json_response(
        app.clone(),
        json_request("POST", "/todo", json!({ "title": "Learn Go" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], 201);
    assert_eq!(created["message"], "Todo created successfully");
    assert_eq!(created["data"]["id"], 1);
    assert_eq!(created["data"]["title"], "Learn Go");
    assert_eq!(created["data"]["completed"], false);

    let (status, updated) = json_response(
        app.clone(),
        json_request(
            "PUT",
            "/todo/1",
            json!({ "title": "Learn Go Updated", "completed": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Todo updated successfully");
    assert_eq!(updated["data"]["title"], "Learn Go Updated");
    assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);

    let (status, listed) = json_response(app.clone(), empty_request("GET", "/todo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));

    let (status, deleted) = json_response(app.clone(), empty_request("DELETE", "/todo/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Todo deleted successfully");

    let (status, missing) = json_response(
        app.clone(),
        json_request("PUT", "/todo/1", json!({ "title": "again" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["status"], 404);

    let (status, _) = json_response(app, empty_request("GET", "/todo/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_id_is_rejected_and_stores_nothing() {
    let (state, store) = test_state(None);

    let (status, body) = json_response(
        app(state),
        json_request("POST", "/todo", json!({ "id": 5, "title": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ID should not be provided");
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let (status, body) = json_response(
        test_router(),
        json_request("POST", "/todo", json!({ "completed": true })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The title is required");
}

#[tokio::test]
async fn delete_zero_is_invalid() {
    let (status, body) = json_response(test_router(), empty_request("DELETE", "/todo/0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid ID");
}

#[tokio::test]
async fn non_numeric_id_gets_a_json_400() {
    let (status, body) = json_response(test_router(), empty_request("GET", "/todo/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn malformed_body_gets_a_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri(api_path("/todo"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": 12"))
        .expect("request should build");

    let (status, body) = json_response(test_router(), request).await;

    assert!(status.is_client_error());
    assert_eq!(body["status"], status.as_u16());
}

#[tokio::test]
async fn quote_without_configuration_is_unavailable() {
    let (status, body) = json_response(test_router(), empty_request("GET", "/quote")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Quote service is not configured");
}
