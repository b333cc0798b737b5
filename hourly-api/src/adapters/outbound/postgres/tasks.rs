use async_trait::async_trait;

use crate::domain::{
    models::{EntityRef, NewTask, ProjectId, Task, TaskId},
    ports::outbound::TaskRepository,
    WorkforceError,
};

use super::{PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i32,
    project_id: i32,
    name: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task::new(row.id, row.project_id, row.name)
    }
}

#[async_trait]
impl TaskRepository for PgEntityStore {
    async fn list_tasks(&self, project_id: Option<ProjectId>) -> Result<Vec<Task>, WorkforceError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, project_id, name
            FROM tasks
            WHERE ($1::INTEGER IS NULL OR project_id = $1)
            ORDER BY id
            "#,
        )
        .bind(project_id.map(|id| id.as_i32()))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn get_task(&self, id: TaskId) -> Result<Option<Task>, WorkforceError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, project_id, name FROM tasks WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Task::from))
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, WorkforceError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (project_id, name)
            VALUES ($1, $2)
            RETURNING id, project_id, name
            "#,
        )
        .bind(task.project_id.as_i32())
        .bind(&task.name)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.into())
    }

    async fn update_task(
        &self,
        id: TaskId,
        task: &NewTask,
    ) -> Result<Option<Task>, WorkforceError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET project_id = $2, name = $3
            WHERE id = $1
            RETURNING id, project_id, name
            "#,
        )
        .bind(id.as_i32())
        .bind(task.project_id.as_i32())
        .bind(&task.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Task::from))
    }

    async fn delete_task(&self, id: TaskId) -> Result<bool, WorkforceError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await;

        self.deleted(result, EntityRef::Task(id)).await
    }

    async fn count_tasks_for_project(
        &self,
        project_id: ProjectId,
    ) -> Result<i64, WorkforceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(project_id.as_i32())
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(count)
    }
}
