//! Request validators run ahead of the route handlers.
//!
//! Existence checks load the addressed record and shape checks turn the raw
//! body into a typed input; both hand their result to the handler through
//! request extensions.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{Body, to_bytes},
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

use crate::{
    db::entities::{action, project},
    error::AppError,
    services::{ActionInput, ProjectInput},
    state::AppState,
};

pub const PROJECT_SHAPE_MESSAGE: &str = "Project requires Name and Description fields.";
pub const ACTION_SHAPE_MESSAGE: &str = "Actions require a project id, description, and notes.";
pub const DESCRIPTION_TOO_LONG_MESSAGE: &str =
    "Description can only hold up to 128 characters. Please reduce.";
pub const PROJECT_MISMATCH_MESSAGE: &str =
    "Action project_id must match the project in the path.";
pub const PROJECT_NOT_FOUND_MESSAGE: &str = "A project with that ID could not be found.";
pub const PROJECT_LOOKUP_FAILED_MESSAGE: &str =
    "There was an error trying to find a project with that ID.";
pub const ACTION_NOT_FOUND_MESSAGE: &str = "An action with this ID could not be found.";
pub const ACTION_LOOKUP_FAILED_MESSAGE: &str =
    "There was an error trying to find an action with that ID.";

pub const PROJECT_ID_PARAM: &str = "id";
pub const ACTION_ID_PARAM: &str = "action_id";

const MAX_BODY_BYTES: usize = 64 * 1024;

pub async fn validate_project_id(
    State(state): State<Arc<AppState>>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_id(params.get(PROJECT_ID_PARAM))
        .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND_MESSAGE))?;

    let project = match state.services.projects().get(id).await {
        Ok(Some(project)) => project,
        Ok(None) => return Err(AppError::not_found(PROJECT_NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error = %err, project_id = id, "project lookup failed");
            return Err(AppError::internal(PROJECT_LOOKUP_FAILED_MESSAGE));
        }
    };

    req.extensions_mut().insert(project);
    Ok(next.run(req).await)
}

/// Must run after [`validate_project_id`]; an action filed under another
/// project is reported as missing.
pub async fn validate_action_id(
    State(state): State<Arc<AppState>>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_id(params.get(ACTION_ID_PARAM))
        .ok_or_else(|| AppError::not_found(ACTION_NOT_FOUND_MESSAGE))?;

    let action = match state.services.actions().get(id).await {
        Ok(Some(action)) => action,
        Ok(None) => return Err(AppError::not_found(ACTION_NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error = %err, action_id = id, "action lookup failed");
            return Err(AppError::internal(ACTION_LOOKUP_FAILED_MESSAGE));
        }
    };

    if let Some(project) = req.extensions().get::<project::Model>() {
        if project.id != action.project_id {
            return Err(AppError::not_found(ACTION_NOT_FOUND_MESSAGE));
        }
    }

    req.extensions_mut().insert(action);
    Ok(next.run(req).await)
}

pub async fn validate_project(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let body = read_json_object(body)
        .await
        .ok_or_else(|| AppError::bad_request(PROJECT_SHAPE_MESSAGE))?;
    let input = parse_project(&body)?;

    let mut req = Request::from_parts(parts, Body::empty());
    req.extensions_mut().insert(input);
    Ok(next.run(req).await)
}

pub async fn validate_action(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let body = read_json_object(body)
        .await
        .ok_or_else(|| AppError::bad_request(ACTION_SHAPE_MESSAGE))?;
    let input = parse_action(&body)?;

    if let Some(project) = parts.extensions.get::<project::Model>() {
        if project.id != input.project_id {
            return Err(AppError::bad_request(PROJECT_MISMATCH_MESSAGE));
        }
    }

    let mut req = Request::from_parts(parts, Body::empty());
    req.extensions_mut().insert(input);
    Ok(next.run(req).await)
}

pub fn parse_project(body: &Map<String, Value>) -> Result<ProjectInput, AppError> {
    let shape_error = || AppError::bad_request(PROJECT_SHAPE_MESSAGE);

    let name = string_field(body, "name").ok_or_else(shape_error)?;
    let description = string_field(body, "description").ok_or_else(shape_error)?;
    let completed = completed_field(body).ok_or_else(shape_error)?;

    Ok(ProjectInput {
        name: name.to_string(),
        description: description.to_string(),
        completed,
    })
}

/// An over-long description is reported before missing fields.
pub fn parse_action(body: &Map<String, Value>) -> Result<ActionInput, AppError> {
    let description = string_field(body, "description");
    if description.is_some_and(|text| text.chars().count() > action::DESCRIPTION_MAX_CHARS) {
        return Err(AppError::bad_request(DESCRIPTION_TOO_LONG_MESSAGE));
    }

    let shape_error = || AppError::bad_request(ACTION_SHAPE_MESSAGE);
    let project_id = body
        .get("project_id")
        .and_then(id_value)
        .ok_or_else(shape_error)?;
    let description = description.ok_or_else(shape_error)?;
    let notes = string_field(body, "notes").ok_or_else(shape_error)?;
    let completed = completed_field(body).ok_or_else(shape_error)?;

    Ok(ActionInput {
        project_id,
        description: description.to_string(),
        notes: notes.to_string(),
        completed,
    })
}

fn parse_id(raw: Option<&String>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn id_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number.as_i64().and_then(|id| i32::try_from(id).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn string_field<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

fn completed_field(body: &Map<String, Value>) -> Option<bool> {
    match body.get("completed") {
        None | Some(Value::Null) => Some(false),
        Some(Value::Bool(completed)) => Some(*completed),
        Some(_) => None,
    }
}

async fn read_json_object(body: Body) -> Option<Map<String, Value>> {
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
