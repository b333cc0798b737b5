use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{
        Allocation, AllocationDetails, AllocationId, AuthContext, Employee, EmployeeId,
        EmployeeInput, EmployeeRecord, EntityRef, NewAllocation, NewTask, NewTimeLog, Project,
        ProjectId, Task, TaskId, TimeLog, TimeLogDetails, TimeLogFilter, TimeLogId,
    },
    password::hash_password,
    ports::{inbound::WorkforceService, outbound::EntityStore},
    Email, WorkforceError,
};

use super::integrity::{
    check_deletable, validate_assignment, validate_task, validate_task_move,
};

/// Implementation of the WorkforceService inbound port.
///
/// Validates input, enforces the caller's role and referential integrity,
/// then delegates to the entity store.
pub struct WorkforceServiceImpl<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> WorkforceServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn required_name(field: &str, value: &str) -> Result<String, WorkforceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WorkforceError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn employee_record(input: EmployeeInput) -> Result<EmployeeRecord, WorkforceError> {
    let name = required_name("name", &input.name)?;

    let hourly_rate = input.hourly_rate.unwrap_or(0.0);
    if !hourly_rate.is_finite() || hourly_rate < 0.0 {
        return Err(WorkforceError::validation(
            "hourly_rate must be a non-negative number",
        ));
    }

    let email = match input.email.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            Email::try_from(raw).map_err(|e| WorkforceError::validation(e.to_string()))?,
        ),
    };

    let password_hash = match input.password.as_deref() {
        None | Some("") => None,
        Some(password) => Some(hash_password(password)?),
    };

    Ok(EmployeeRecord {
        name,
        hourly_rate,
        email,
        password_hash,
    })
}

fn check_allocated_hours(hours: f64) -> Result<(), WorkforceError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(WorkforceError::validation(
            "allocated_hours must be a positive number",
        ))
    }
}

#[async_trait]
impl<S: EntityStore> WorkforceService for WorkforceServiceImpl<S> {
    // ========================================================================
    // Employees
    // ========================================================================

    async fn list_employees(&self) -> Result<Vec<Employee>, WorkforceError> {
        self.store.list_employees().await
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, WorkforceError> {
        self.store
            .get_employee(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found("employee", id))
    }

    async fn create_employee(
        &self,
        ctx: &AuthContext,
        input: EmployeeInput,
    ) -> Result<Employee, WorkforceError> {
        ctx.require_admin()?;
        let record = employee_record(input)?;
        self.store.create_employee(&record).await
    }

    async fn update_employee(
        &self,
        ctx: &AuthContext,
        id: EmployeeId,
        input: EmployeeInput,
    ) -> Result<Employee, WorkforceError> {
        ctx.require_admin()?;
        let record = employee_record(input)?;
        self.store
            .update_employee(id, &record)
            .await?
            .ok_or_else(|| WorkforceError::not_found("employee", id))
    }

    async fn delete_employee(
        &self,
        ctx: &AuthContext,
        id: EmployeeId,
    ) -> Result<(), WorkforceError> {
        ctx.require_admin()?;
        self.get_employee(id).await?;
        check_deletable(self.store.as_ref(), EntityRef::Employee(id)).await?;

        if !self.store.delete_employee(id).await? {
            return Err(WorkforceError::not_found("employee", id));
        }
        tracing::info!(employee_id = %id, "deleted employee");
        Ok(())
    }

    // ========================================================================
    // Projects
    // ========================================================================

    async fn list_projects(&self) -> Result<Vec<Project>, WorkforceError> {
        self.store.list_projects().await
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, WorkforceError> {
        self.store
            .get_project(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found("project", id))
    }

    async fn create_project(
        &self,
        ctx: &AuthContext,
        name: &str,
    ) -> Result<Project, WorkforceError> {
        ctx.require_admin()?;
        let name = required_name("name", name)?;
        self.store.create_project(&name).await
    }

    async fn update_project(
        &self,
        ctx: &AuthContext,
        id: ProjectId,
        name: &str,
    ) -> Result<Project, WorkforceError> {
        ctx.require_admin()?;
        let name = required_name("name", name)?;
        self.store
            .update_project(id, &name)
            .await?
            .ok_or_else(|| WorkforceError::not_found("project", id))
    }

    async fn delete_project(&self, ctx: &AuthContext, id: ProjectId) -> Result<(), WorkforceError> {
        ctx.require_admin()?;
        self.get_project(id).await?;
        check_deletable(self.store.as_ref(), EntityRef::Project(id)).await?;

        if !self.store.delete_project(id).await? {
            return Err(WorkforceError::not_found("project", id));
        }
        tracing::info!(project_id = %id, "deleted project");
        Ok(())
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    async fn list_tasks(&self, project_id: Option<ProjectId>) -> Result<Vec<Task>, WorkforceError> {
        self.store.list_tasks(project_id).await
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, WorkforceError> {
        self.store
            .get_task(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found("task", id))
    }

    async fn create_task(&self, ctx: &AuthContext, task: NewTask) -> Result<Task, WorkforceError> {
        ctx.require_admin()?;
        let task = NewTask {
            name: required_name("name", &task.name)?,
            ..task
        };
        validate_task(self.store.as_ref(), &task).await?;
        self.store.create_task(&task).await
    }

    async fn update_task(
        &self,
        ctx: &AuthContext,
        id: TaskId,
        task: NewTask,
    ) -> Result<Task, WorkforceError> {
        ctx.require_admin()?;
        let task = NewTask {
            name: required_name("name", &task.name)?,
            ..task
        };
        let current = self.get_task(id).await?;
        validate_task(self.store.as_ref(), &task).await?;
        validate_task_move(self.store.as_ref(), &current, &task).await?;
        self.store
            .update_task(id, &task)
            .await?
            .ok_or_else(|| WorkforceError::not_found("task", id))
    }

    async fn delete_task(&self, ctx: &AuthContext, id: TaskId) -> Result<(), WorkforceError> {
        ctx.require_admin()?;
        self.get_task(id).await?;
        check_deletable(self.store.as_ref(), EntityRef::Task(id)).await?;

        if !self.store.delete_task(id).await? {
            return Err(WorkforceError::not_found("task", id));
        }
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }

    // ========================================================================
    // Allocations
    // ========================================================================

    async fn list_allocations(&self) -> Result<Vec<AllocationDetails>, WorkforceError> {
        self.store.list_allocations().await
    }

    async fn get_allocation(&self, id: AllocationId) -> Result<Allocation, WorkforceError> {
        self.store
            .get_allocation(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found("allocation", id))
    }

    async fn create_allocation(
        &self,
        ctx: &AuthContext,
        allocation: NewAllocation,
    ) -> Result<Allocation, WorkforceError> {
        ctx.require_admin()?;
        check_allocated_hours(allocation.allocated_hours)?;
        validate_assignment(
            self.store.as_ref(),
            allocation.employee_id,
            allocation.project_id,
            allocation.task_id,
        )
        .await?;
        self.store.create_allocation(&allocation).await
    }

    async fn update_allocation(
        &self,
        ctx: &AuthContext,
        id: AllocationId,
        allocation: NewAllocation,
    ) -> Result<Allocation, WorkforceError> {
        ctx.require_admin()?;
        check_allocated_hours(allocation.allocated_hours)?;
        self.get_allocation(id).await?;
        validate_assignment(
            self.store.as_ref(),
            allocation.employee_id,
            allocation.project_id,
            allocation.task_id,
        )
        .await?;
        self.store
            .update_allocation(id, &allocation)
            .await?
            .ok_or_else(|| WorkforceError::not_found("allocation", id))
    }

    async fn delete_allocation(
        &self,
        ctx: &AuthContext,
        id: AllocationId,
    ) -> Result<(), WorkforceError> {
        ctx.require_admin()?;
        if !self.store.delete_allocation(id).await? {
            return Err(WorkforceError::not_found("allocation", id));
        }
        Ok(())
    }

    // ========================================================================
    // Time logs
    // ========================================================================

    async fn list_time_logs(
        &self,
        filter: TimeLogFilter,
    ) -> Result<Vec<TimeLogDetails>, WorkforceError> {
        self.store.list_time_logs(&filter).await
    }

    async fn get_time_log(&self, id: TimeLogId) -> Result<TimeLog, WorkforceError> {
        self.store
            .get_time_log(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found("time_log", id))
    }

    async fn create_time_log(
        &self,
        ctx: &AuthContext,
        log: NewTimeLog,
    ) -> Result<TimeLog, WorkforceError> {
        ctx.require_actor_for(log.employee_id)?;
        validate_assignment(
            self.store.as_ref(),
            log.employee_id,
            log.project_id,
            log.task_id,
        )
        .await?;
        self.store.create_time_log(&log).await
    }

    async fn update_time_log(
        &self,
        ctx: &AuthContext,
        id: TimeLogId,
        log: NewTimeLog,
    ) -> Result<TimeLog, WorkforceError> {
        let existing = self.get_time_log(id).await?;
        // Employees can neither edit someone else's log nor hand theirs over.
        ctx.require_actor_for(existing.employee_id)?;
        ctx.require_actor_for(log.employee_id)?;

        validate_assignment(
            self.store.as_ref(),
            log.employee_id,
            log.project_id,
            log.task_id,
        )
        .await?;
        self.store
            .update_time_log(id, &log)
            .await?
            .ok_or_else(|| WorkforceError::not_found("time_log", id))
    }

    async fn delete_time_log(&self, ctx: &AuthContext, id: TimeLogId) -> Result<(), WorkforceError> {
        let existing = self.get_time_log(id).await?;
        ctx.require_actor_for(existing.employee_id)?;

        if !self.store.delete_time_log(id).await? {
            return Err(WorkforceError::not_found("time_log", id));
        }
        Ok(())
    }
}
