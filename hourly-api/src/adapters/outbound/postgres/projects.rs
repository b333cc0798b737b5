use async_trait::async_trait;

use crate::domain::{
    models::{EntityRef, Project, ProjectId},
    ports::outbound::ProjectRepository,
    WorkforceError,
};

use super::{PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i32,
    name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project::new(row.id, row.name)
    }
}

#[async_trait]
impl ProjectRepository for PgEntityStore {
    async fn list_projects(&self) -> Result<Vec<Project>, WorkforceError> {
        let rows = sqlx::query_as::<_, ProjectRow>("SELECT id, name FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>, WorkforceError> {
        let row = sqlx::query_as::<_, ProjectRow>("SELECT id, name FROM projects WHERE id = $1")
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row.map(Project::from))
    }

    async fn create_project(&self, name: &str) -> Result<Project, WorkforceError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "INSERT INTO projects (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.into())
    }

    async fn update_project(
        &self,
        id: ProjectId,
        name: &str,
    ) -> Result<Option<Project>, WorkforceError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "UPDATE projects SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id.as_i32())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Project::from))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool, WorkforceError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await;

        self.deleted(result, EntityRef::Project(id)).await
    }
}
