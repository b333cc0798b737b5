use async_trait::async_trait;

use crate::domain::{
    models::{NewTask, ProjectId, Task, TaskId},
    WorkforceError,
};

/// Outbound port for task persistence.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Tasks ordered by id, optionally only those of one project.
    async fn list_tasks(&self, project_id: Option<ProjectId>) -> Result<Vec<Task>, WorkforceError>;

    async fn get_task(&self, id: TaskId) -> Result<Option<Task>, WorkforceError>;

    async fn create_task(&self, task: &NewTask) -> Result<Task, WorkforceError>;

    async fn update_task(&self, id: TaskId, task: &NewTask)
        -> Result<Option<Task>, WorkforceError>;

    async fn delete_task(&self, id: TaskId) -> Result<bool, WorkforceError>;

    async fn count_tasks_for_project(&self, project_id: ProjectId)
        -> Result<i64, WorkforceError>;
}
