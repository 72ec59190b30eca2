use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt;

use project_tracker::{
    config::AppConfig,
    db::entities::{action, project},
    routes::{actions, projects, validators},
    state::AppState,
    test_helpers::{mock_state, mock_state_with, test_app},
};

fn api_path(path: &str) -> String {
    format!("{}{path}", AppConfig::default().general.api_prefix)
}

async fn send(
    state: Arc<AppState>,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(api_path(path));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = test_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_failures_use_fixed_messages() {
    let (status, json) = send(mock_state(), "GET", "/projects", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "errorMessage": projects::LIST_FAILED_MESSAGE }));

    let (status, json) = send(mock_state(), "GET", "/actions", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "errorMessage": actions::LIST_FAILED_MESSAGE }));
}

#[tokio::test]
async fn create_failure_uses_fixed_message() {
    let (status, json) = send(
        mock_state(),
        "POST",
        "/projects",
        Some(json!({ "name": "A", "description": "B" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["errorMessage"], projects::CREATE_FAILED_MESSAGE);
}

#[tokio::test]
async fn project_lookup_failure_is_reported_as_server_error() {
    let (status, json) = send(
        mock_state(),
        "PUT",
        "/projects/1",
        Some(json!({ "name": "A", "description": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["errorMessage"], validators::PROJECT_LOOKUP_FAILED_MESSAGE);

    let (status, json) = send(mock_state(), "DELETE", "/actions/1/2", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["errorMessage"], validators::PROJECT_LOOKUP_FAILED_MESSAGE);
}

#[tokio::test]
async fn missing_project_stops_before_any_write() {
    // One empty result for the lookup; a write would find the buffer drained.
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([Vec::<project::Model>::new()])
        .into_connection();

    let (status, json) = send(
        mock_state_with(db),
        "PUT",
        "/projects/999",
        Some(json!({ "name": "A", "description": "B" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorMessage"], validators::PROJECT_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn empty_action_table_lists_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([Vec::<action::Model>::new()])
        .into_connection();

    let (status, json) = send(mock_state_with(db), "GET", "/actions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn invalid_body_is_rejected_without_touching_database() {
    let (status, json) =
        send(mock_state(), "POST", "/projects", Some(json!({ "name": "A" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorMessage"], validators::PROJECT_SHAPE_MESSAGE);
}

#[tokio::test]
async fn malformed_json_is_a_shape_error() {
    let request = Request::builder()
        .method("POST")
        .uri(api_path("/projects"))
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = test_app(mock_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["errorMessage"], validators::PROJECT_SHAPE_MESSAGE);
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let (status, json) = send(mock_state(), "GET", "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "errorMessage": "The requested resource could not be found." })
    );
}

#[tokio::test]
async fn health_responds_without_database() {
    let (status, json) = send(mock_state(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
}
