//! Referential integrity checks run before writes and deletes.
//!
//! The database enforces the same rules with foreign keys; running them here
//! first yields errors that name the offending field or dependents.

use crate::domain::{
    models::{EmployeeId, EntityRef, NewTask, ProjectId, Task, TaskId},
    ports::outbound::EntityStore,
    WorkforceError,
};

/// A task's project must exist.
pub async fn validate_task<S>(store: &S, task: &NewTask) -> Result<(), WorkforceError>
where
    S: EntityStore + ?Sized,
{
    if store.get_project(task.project_id).await?.is_none() {
        return Err(WorkforceError::InvalidReference {
            field: "project_id",
        });
    }

    Ok(())
}

/// A task referenced by allocations or time logs stays in its project, since
/// those records carry the project id alongside the task id.
pub async fn validate_task_move<S>(
    store: &S,
    current: &Task,
    task: &NewTask,
) -> Result<(), WorkforceError>
where
    S: EntityStore + ?Sized,
{
    if current.project_id == task.project_id {
        return Ok(());
    }

    check_deletable(store, EntityRef::Task(current.id)).await
}

/// Employee, project and task must exist, and the task must belong to the
/// project. Shared by allocations and time logs.
pub async fn validate_assignment<S>(
    store: &S,
    employee_id: EmployeeId,
    project_id: ProjectId,
    task_id: TaskId,
) -> Result<(), WorkforceError>
where
    S: EntityStore + ?Sized,
{
    if store.get_employee(employee_id).await?.is_none() {
        return Err(WorkforceError::InvalidReference {
            field: "employee_id",
        });
    }

    if store.get_project(project_id).await?.is_none() {
        return Err(WorkforceError::InvalidReference {
            field: "project_id",
        });
    }

    match store.get_task(task_id).await? {
        Some(task) if task.project_id == project_id => Ok(()),
        _ => Err(WorkforceError::InvalidReference { field: "task_id" }),
    }
}

/// Fails with `InUse` if any task, allocation or time log points at `target`.
pub async fn check_deletable<S>(store: &S, target: EntityRef) -> Result<(), WorkforceError>
where
    S: EntityStore + ?Sized,
{
    if let EntityRef::Project(project_id) = target {
        let count = store.count_tasks_for_project(project_id).await?;
        if count > 0 {
            return Err(WorkforceError::InUse {
                referencing: "tasks",
                count,
            });
        }
    }

    let count = store.count_allocations_referencing(target).await?;
    if count > 0 {
        return Err(WorkforceError::InUse {
            referencing: "allocations",
            count,
        });
    }

    let count = store.count_time_logs_referencing(target).await?;
    if count > 0 {
        return Err(WorkforceError::InUse {
            referencing: "time_logs",
            count,
        });
    }

    Ok(())
}
