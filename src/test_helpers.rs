use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    services::ServiceContext,
    state::AppState,
};

/// Fresh private in-memory sqlite database with the schema applied.
///
/// The pool is pinned to one connection because every sqlite `:memory:`
/// connection is its own database.
pub async fn sqlite_db() -> DatabaseConnection {
    let database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_idle: 1,
    };
    connection::connect(&database)
        .await
        .expect("connect to in-memory sqlite")
}

pub async fn sqlite_state() -> Arc<AppState> {
    AppState::new(AppConfig::default(), sqlite_db().await)
}

/// State backed by a mock connection whose result buffers start empty, so
/// any query that reaches it fails.
pub fn mock_state() -> Arc<AppState> {
    mock_state_with(MockDatabase::new(DatabaseBackend::Sqlite).into_connection())
}

pub fn mock_state_with(db: DatabaseConnection) -> Arc<AppState> {
    AppState::new(AppConfig::default(), db)
}

pub fn state_with_services(services: ServiceContext) -> Arc<AppState> {
    AppState::with_services(AppConfig::default(), services)
}

pub fn test_app(state: Arc<AppState>) -> Router {
    app(state)
}
