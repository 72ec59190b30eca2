use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    error::AppError,
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::{actions, health, projects};

const ROUTE_NOT_FOUND_MESSAGE: &str = "The requested resource could not be found.";

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(projects::router(state.clone()))
        .merge(actions::router(state.clone()));

    let prefix = state.config.general.api_prefix.as_str();
    let router = if prefix == "/" {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };
    router.fallback(route_not_found)
}

/// Full application stack: routes plus JSON error normalization and panic capture.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}

async fn route_not_found() -> AppError {
    AppError::not_found(ROUTE_NOT_FOUND_MESSAGE)
}
