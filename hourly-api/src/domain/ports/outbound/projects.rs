use async_trait::async_trait;

use crate::domain::{
    models::{Project, ProjectId},
    WorkforceError,
};

/// Outbound port for project persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn list_projects(&self) -> Result<Vec<Project>, WorkforceError>;

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, WorkforceError>;

    async fn create_project(&self, name: &str) -> Result<Project, WorkforceError>;

    async fn update_project(
        &self,
        id: ProjectId,
        name: &str,
    ) -> Result<Option<Project>, WorkforceError>;

    async fn delete_project(&self, id: ProjectId) -> Result<bool, WorkforceError>;
}
