use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use project_tracker::{
    routes::validators,
    state::AppState,
    test_helpers::{sqlite_state, test_app},
};

async fn json_response(
    state: &Arc<AppState>,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = test_app(state.clone())
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, serde_json::from_slice(&bytes).expect("body should be json"))
}

async fn seed_project(state: &Arc<AppState>, name: &str) -> i64 {
    let (status, project) = json_response(
        state,
        "POST",
        "/api/projects",
        Some(json!({ "name": name, "description": "seeded" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    project["id"].as_i64().unwrap()
}

async fn seed_action(state: &Arc<AppState>, project_id: i64, description: &str) -> Value {
    let (status, action) = json_response(
        state,
        "POST",
        &format!("/api/actions/{project_id}"),
        Some(json!({
            "project_id": project_id,
            "description": description,
            "notes": "seeded notes",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {action}");
    action
}

#[tokio::test]
async fn create_action_returns_record_with_generated_id() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    let action = seed_action(&state, project_id, "Water plants").await;

    assert!(action["id"].as_i64().is_some());
    assert_eq!(action["project_id"], project_id);
    assert_eq!(action["description"], "Water plants");
    assert_eq!(action["notes"], "seeded notes");
    assert_eq!(action["completed"], false);
}

#[tokio::test]
async fn project_id_may_be_sent_as_numeric_string() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    let (status, action) = json_response(
        &state,
        "POST",
        &format!("/api/actions/{project_id}"),
        Some(json!({
            "project_id": project_id.to_string(),
            "description": "Prune",
            "notes": "",
            "completed": true,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(action["project_id"], project_id);
    assert_eq!(action["completed"], true);
}

#[tokio::test]
async fn description_over_limit_is_rejected() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    let (status, json) = json_response(
        &state,
        "POST",
        &format!("/api/actions/{project_id}"),
        Some(json!({ "description": "x".repeat(129) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorMessage"], validators::DESCRIPTION_TOO_LONG_MESSAGE);

    let (_, actions) = json_response(&state, "GET", "/api/actions", None).await;
    assert_eq!(actions, json!([]));
}

#[tokio::test]
async fn description_at_limit_is_accepted() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    let action = seed_action(&state, project_id, &"é".repeat(128)).await;

    assert_eq!(action["description"].as_str().unwrap().chars().count(), 128);
}

#[tokio::test]
async fn action_missing_fields_is_rejected() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    for body in [
        json!({ "project_id": project_id, "description": "d" }),
        json!({ "project_id": project_id, "notes": "n" }),
        json!({ "description": "d", "notes": "n" }),
        json!({ "project_id": project_id, "description": 7, "notes": "n" }),
    ] {
        let (status, json) = json_response(
            &state,
            "POST",
            &format!("/api/actions/{project_id}"),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errorMessage"], validators::ACTION_SHAPE_MESSAGE);
    }
}

#[tokio::test]
async fn action_for_other_project_is_rejected() {
    let state = sqlite_state().await;
    let first = seed_project(&state, "First").await;
    let second = seed_project(&state, "Second").await;

    let (status, json) = json_response(
        &state,
        "POST",
        &format!("/api/actions/{first}"),
        Some(json!({ "project_id": second, "description": "d", "notes": "n" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorMessage"], validators::PROJECT_MISMATCH_MESSAGE);
}

#[tokio::test]
async fn create_under_missing_project_is_not_found() {
    let state = sqlite_state().await;

    let (status, json) = json_response(
        &state,
        "POST",
        "/api/actions/5",
        Some(json!({ "project_id": 5, "description": "d", "notes": "n" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorMessage"], validators::PROJECT_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn list_actions_returns_every_action() {
    let state = sqlite_state().await;
    let first = seed_project(&state, "First").await;
    let second = seed_project(&state, "Second").await;
    seed_action(&state, first, "a").await;
    seed_action(&state, second, "b").await;

    let (status, actions) = json_response(&state, "GET", "/api/actions", None).await;
    let (_, again) = json_response(&state, "GET", "/api/actions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(actions, again);
    assert_eq!(actions.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_replaces_action_fields() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;
    let action = seed_action(&state, project_id, "Water").await;
    let action_id = action["id"].as_i64().unwrap();

    let (status, updated) = json_response(
        &state,
        "PUT",
        &format!("/api/actions/{project_id}/{action_id}"),
        Some(json!({
            "project_id": project_id,
            "description": "Water twice",
            "notes": "morning and evening",
            "completed": true,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], action_id);
    assert_eq!(updated["description"], "Water twice");
    assert_eq!(updated["notes"], "morning and evening");
    assert_eq!(updated["completed"], true);
}

#[tokio::test]
async fn action_under_wrong_project_is_not_found() {
    let state = sqlite_state().await;
    let owner = seed_project(&state, "Owner").await;
    let other = seed_project(&state, "Other").await;
    let action_id = seed_action(&state, owner, "Mine").await["id"].as_i64().unwrap();

    let (status, json) = json_response(
        &state,
        "PUT",
        &format!("/api/actions/{other}/{action_id}"),
        Some(json!({ "project_id": other, "description": "Stolen", "notes": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorMessage"], validators::ACTION_NOT_FOUND_MESSAGE);

    let (status, _) =
        json_response(&state, "DELETE", &format!("/api/actions/{other}/{action_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, actions) =
        json_response(&state, "GET", &format!("/api/projects/{owner}/actions"), None).await;
    assert_eq!(actions[0]["description"], "Mine");
}

#[tokio::test]
async fn delete_of_missing_action_is_not_found() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;

    let (status, json) =
        json_response(&state, "DELETE", &format!("/api/actions/{project_id}/77"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "errorMessage": "An action with this ID could not be found." })
    );
}

#[tokio::test]
async fn delete_returns_removed_action() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;
    let action_id = seed_action(&state, project_id, "Rake").await["id"].as_i64().unwrap();

    let (status, removed) = json_response(
        &state,
        "DELETE",
        &format!("/api/actions/{project_id}/{action_id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], action_id);
    assert_eq!(removed["description"], "Rake");

    let (_, actions) = json_response(&state, "GET", "/api/actions", None).await;
    assert_eq!(actions, json!([]));
}

#[tokio::test]
async fn deleting_project_removes_its_actions() {
    let state = sqlite_state().await;
    let project_id = seed_project(&state, "Garden").await;
    seed_action(&state, project_id, "Rake").await;

    let (status, _) =
        json_response(&state, "DELETE", &format!("/api/projects/{project_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, actions) = json_response(&state, "GET", "/api/actions", None).await;
    assert_eq!(actions, json!([]));
}
