//! Persistence contract the HTTP layer is written against.
//!
//! Every call is a single suspension point; implementations own any
//! consistency guarantees between an existence check and a later write.

use async_trait::async_trait;

use crate::db::{
    dao::DaoResult,
    entities::{action, project},
};

/// Validated project fields; updates replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

/// Validated action fields; updates replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInput {
    pub project_id: i32,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn get_all(&self) -> DaoResult<Vec<project::Model>>;
    async fn get(&self, id: i32) -> DaoResult<Option<project::Model>>;
    async fn get_project_actions(&self, project_id: i32) -> DaoResult<Vec<action::Model>>;
    async fn insert(&self, input: ProjectInput) -> DaoResult<project::Model>;
    async fn update(&self, id: i32, input: ProjectInput) -> DaoResult<project::Model>;
    async fn remove(&self, id: i32) -> DaoResult<project::Model>;
}

#[async_trait]
pub trait ActionStore: Send + Sync {
    async fn get_all(&self) -> DaoResult<Vec<action::Model>>;
    async fn get(&self, id: i32) -> DaoResult<Option<action::Model>>;
    async fn insert(&self, input: ActionInput) -> DaoResult<action::Model>;
    async fn update(&self, id: i32, input: ActionInput) -> DaoResult<action::Model>;
    async fn remove(&self, id: i32) -> DaoResult<action::Model>;
}
