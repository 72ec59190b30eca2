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
    db::entities::project,
    response::{ApiResult, created, ok},
    routes::{actions::ActionResponse, store_failure, validators},
    services::ProjectInput,
    state::AppState,
};

pub const LIST_FAILED_MESSAGE: &str = "There was an error returning a list of projects.";
pub const ACTIONS_FAILED_MESSAGE: &str =
    "There was an error finding the actions for this project.";
pub const CREATE_FAILED_MESSAGE: &str = "There was an error trying to create this project.";
pub const UPDATE_FAILED_MESSAGE: &str = "There was an error trying to update this project.";
pub const DELETE_FAILED_MESSAGE: &str =
    "There was an error while trying to delete this project.";

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    let project_exists =
        middleware::from_fn_with_state(state.clone(), validators::validate_project_id);
    let project_shape = middleware::from_fn(validators::validate_project);

    Router::new()
        .route("/projects", get(list_projects))
        .route(
            "/projects",
            post(create_project).route_layer(project_shape.clone()),
        )
        .route(
            "/projects/{id}",
            put(update_project)
                .route_layer(project_shape)
                .route_layer(project_exists.clone()),
        )
        .route(
            "/projects/{id}",
            delete(delete_project).route_layer(project_exists.clone()),
        )
        .route(
            "/projects/{id}/actions",
            get(list_project_actions).route_layer(project_exists),
        )
        .with_state(state)
}

async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ProjectResponse>> {
    let projects = state
        .services
        .projects()
        .get_all()
        .await
        .map_err(|err| store_failure(err, LIST_FAILED_MESSAGE))?;
    ok(projects.into_iter().map(ProjectResponse::from).collect())
}

async fn list_project_actions(
    State(state): State<Arc<AppState>>,
    Extension(project): Extension<project::Model>,
) -> ApiResult<Vec<ActionResponse>> {
    let actions = state
        .services
        .projects()
        .get_project_actions(project.id)
        .await
        .map_err(|err| store_failure(err, ACTIONS_FAILED_MESSAGE))?;
    ok(actions.into_iter().map(ActionResponse::from).collect())
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    Extension(input): Extension<ProjectInput>,
) -> ApiResult<ProjectResponse> {
    let project = state
        .services
        .projects()
        .insert(input)
        .await
        .map_err(|err| store_failure(err, CREATE_FAILED_MESSAGE))?;
    created(project.into())
}

async fn update_project(
    State(state): State<Arc<AppState>>,
    Extension(project): Extension<project::Model>,
    Extension(input): Extension<ProjectInput>,
) -> ApiResult<ProjectResponse> {
    let project = state
        .services
        .projects()
        .update(project.id, input)
        .await
        .map_err(|err| store_failure(err, UPDATE_FAILED_MESSAGE))?;
    ok(project.into())
}

async fn delete_project(
    State(state): State<Arc<AppState>>,
    Extension(project): Extension<project::Model>,
) -> ApiResult<ProjectResponse> {
    let removed = state
        .services
        .projects()
        .remove(project.id)
        .await
        .map_err(|err| store_failure(err, DELETE_FAILED_MESSAGE))?;
    ok(removed.into())
}

impl From<project::Model> for ProjectResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
