use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};

use super::{DaoBase, DaoResult};
use crate::{
    db::entities::{action, prelude::Action},
    services::store::{ActionInput, ActionStore},
};

#[derive(Clone)]
pub struct ActionDao {
    db: DatabaseConnection,
}

impl DaoBase for ActionDao {
    type Entity = Action;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ActionDao {
    pub async fn list_actions(&self) -> DaoResult<Vec<action::Model>> {
        self.find_all(|query| query.order_by_asc(action::Column::Id))
            .await
    }

    pub async fn list_for_project(&self, project_id: i32) -> DaoResult<Vec<action::Model>> {
        self.find_all(move |query| {
            query
                .filter(action::Column::ProjectId.eq(project_id))
                .order_by_asc(action::Column::Id)
        })
        .await
    }

    pub async fn find_action(&self, id: i32) -> DaoResult<Option<action::Model>> {
        self.find_by_id(id).await
    }

    pub async fn create_action(&self, input: ActionInput) -> DaoResult<action::Model> {
        let model = action::ActiveModel {
            project_id: Set(input.project_id),
            description: Set(input.description),
            notes: Set(input.notes),
            completed: Set(input.completed),
            ..Default::default()
        };
        DaoBase::create(self, model).await
    }

    pub async fn replace_action(&self, id: i32, input: ActionInput) -> DaoResult<action::Model> {
        DaoBase::update(self, id, move |active| {
            active.project_id = Set(input.project_id);
            active.description = Set(input.description);
            active.notes = Set(input.notes);
            active.completed = Set(input.completed);
        })
        .await
    }

    pub async fn delete_action(&self, id: i32) -> DaoResult<action::Model> {
        DaoBase::delete(self, id).await
    }
}

#[async_trait]
impl ActionStore for ActionDao {
    async fn get_all(&self) -> DaoResult<Vec<action::Model>> {
        self.list_actions().await
    }

    async fn get(&self, id: i32) -> DaoResult<Option<action::Model>> {
        self.find_action(id).await
    }

    async fn insert(&self, input: ActionInput) -> DaoResult<action::Model> {
        self.create_action(input).await
    }

    async fn update(&self, id: i32, input: ActionInput) -> DaoResult<action::Model> {
        self.replace_action(id, input).await
    }

    async fn remove(&self, id: i32) -> DaoResult<action::Model> {
        self.delete_action(id).await
    }
}
