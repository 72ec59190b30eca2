use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::State,
    middleware,
    routing::{delete, get, post, put},
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use crate::{
    db::entities::action,
    response::{ApiResult, created, ok},
    routes::{store_failure, validators},
    services::ActionInput,
    state::AppState,
};

pub const LIST_FAILED_MESSAGE: &str = "There was an error returning a list of actions.";
pub const CREATE_FAILED_MESSAGE: &str = "An error occured trying to create this action.";
pub const UPDATE_FAILED_MESSAGE: &str = "There was an error trying to update this action.";
pub const DELETE_FAILED_MESSAGE: &str = "An error occured trying to delete this action.";

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub id: i32,
    pub project_id: i32,
    pub description: String,
    pub notes: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    let project_exists =
        middleware::from_fn_with_state(state.clone(), validators::validate_project_id);
    let action_exists =
        middleware::from_fn_with_state(state.clone(), validators::validate_action_id);
    let action_shape = middleware::from_fn(validators::validate_action);

    // Layers added last run first: project, then action, then body.
    Router::new()
        .route("/actions", get(list_actions))
        .route(
            "/actions/{id}",
            post(create_action)
                .route_layer(action_shape.clone())
                .route_layer(project_exists.clone()),
        )
        .route(
            "/actions/{id}/{action_id}",
            put(update_action)
                .route_layer(action_shape)
                .route_layer(action_exists.clone())
                .route_layer(project_exists.clone()),
        )
        .route(
            "/actions/{id}/{action_id}",
            delete(delete_action)
                .route_layer(action_exists)
                .route_layer(project_exists),
        )
        .with_state(state)
}

async fn list_actions(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ActionResponse>> {
    let actions = state
        .services
        .actions()
        .get_all()
        .await
        .map_err(|err| store_failure(err, LIST_FAILED_MESSAGE))?;
    ok(actions.into_iter().map(ActionResponse::from).collect())
}

async fn create_action(
    State(state): State<Arc<AppState>>,
    Extension(input): Extension<ActionInput>,
) -> ApiResult<ActionResponse> {
    let action = state
        .services
        .actions()
        .insert(input)
        .await
        .map_err(|err| store_failure(err, CREATE_FAILED_MESSAGE))?;
    created(action.into())
}

async fn update_action(
    State(state): State<Arc<AppState>>,
    Extension(action): Extension<action::Model>,
    Extension(input): Extension<ActionInput>,
) -> ApiResult<ActionResponse> {
    let action = state
        .services
        .actions()
        .update(action.id, input)
        .await
        .map_err(|err| store_failure(err, UPDATE_FAILED_MESSAGE))?;
    ok(action.into())
}

async fn delete_action(
    State(state): State<Arc<AppState>>,
    Extension(action): Extension<action::Model>,
) -> ApiResult<ActionResponse> {
    let removed = state
        .services
        .actions()
        .remove(action.id)
        .await
        .map_err(|err| store_failure(err, DELETE_FAILED_MESSAGE))?;
    ok(removed.into())
}

impl From<action::Model> for ActionResponse {
    fn from(model: action::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            description: model.description,
            notes: model.notes,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
