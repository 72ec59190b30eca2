use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::store::{ActionStore, ProjectStore},
};

#[derive(Clone)]
pub struct ServiceContext {
    projects: Arc<dyn ProjectStore>,
    actions: Arc<dyn ActionStore>,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        let daos = DaoContext::new(db);
        Self {
            projects: Arc::new(daos.project()),
            actions: Arc::new(daos.action()),
        }
    }

    pub fn from_stores(projects: Arc<dyn ProjectStore>, actions: Arc<dyn ActionStore>) -> Self {
        Self { projects, actions }
    }

    pub fn projects(&self) -> &dyn ProjectStore {
        self.projects.as_ref()
    }

    pub fn actions(&self) -> &dyn ActionStore {
        self.actions.as_ref()
    }
}
