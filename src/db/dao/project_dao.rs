use async_trait::async_trait;
use sea_orm::{DatabaseConnection, QueryOrder, Set};

use super::{ActionDao, DaoBase, DaoResult};
use crate::{
    db::entities::{action, prelude::Project, project},
    services::store::{ProjectInput, ProjectStore},
};

#[derive(Clone)]
pub struct ProjectDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectDao {
    type Entity = Project;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectDao {
    fn action_dao(&self) -> ActionDao {
        ActionDao::new(&self.db)
    }

    pub async fn list_projects(&self) -> DaoResult<Vec<project::Model>> {
        self.find_all(|query| query.order_by_asc(project::Column::Id))
            .await
    }

    pub async fn find_project(&self, id: i32) -> DaoResult<Option<project::Model>> {
        self.find_by_id(id).await
    }

    pub async fn create_project(&self, input: ProjectInput) -> DaoResult<project::Model> {
        let model = project::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            completed: Set(input.completed),
            ..Default::default()
        };
        DaoBase::create(self, model).await
    }

    pub async fn replace_project(
        &self,
        id: i32,
        input: ProjectInput,
    ) -> DaoResult<project::Model> {
        DaoBase::update(self, id, move |active| {
            active.name = Set(input.name);
            active.description = Set(input.description);
            active.completed = Set(input.completed);
        })
        .await
    }

    pub async fn delete_project(&self, id: i32) -> DaoResult<project::Model> {
        DaoBase::delete(self, id).await
    }
}

#[async_trait]
impl ProjectStore for ProjectDao {
    async fn get_all(&self) -> DaoResult<Vec<project::Model>> {
        self.list_projects().await
    }

    async fn get(&self, id: i32) -> DaoResult<Option<project::Model>> {
        self.find_project(id).await
    }

    async fn get_project_actions(&self, project_id: i32) -> DaoResult<Vec<action::Model>> {
        self.action_dao().list_for_project(project_id).await
    }

    async fn insert(&self, input: ProjectInput) -> DaoResult<project::Model> {
        self.create_project(input).await
    }

    async fn update(&self, id: i32, input: ProjectInput) -> DaoResult<project::Model> {
        self.replace_project(id, input).await
    }

    async fn remove(&self, id: i32) -> DaoResult<project::Model> {
        self.delete_project(id).await
    }
}
