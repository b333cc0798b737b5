use async_trait::async_trait;

use crate::domain::{
    models::{
        Allocation, AllocationDetails, AllocationId, AuthContext, Employee, EmployeeId,
        EmployeeInput, NewAllocation, NewTask, NewTimeLog, Project, ProjectId, Task, TaskId,
        TimeLog, TimeLogDetails, TimeLogFilter, TimeLogId,
    },
    WorkforceError,
};

/// Inbound port for the employee/project/task/allocation/time log records.
///
/// Reads are open to any authenticated caller. Every mutation takes the
/// caller's [`AuthContext`] and enforces role there: admins may change
/// anything, employees only their own time logs.
#[async_trait]
pub trait WorkforceService: Send + Sync + 'static {
    // ========================================================================
    // Employees
    // ========================================================================

    async fn list_employees(&self) -> Result<Vec<Employee>, WorkforceError>;

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, WorkforceError>;

    async fn create_employee(
        &self,
        ctx: &AuthContext,
        input: EmployeeInput,
    ) -> Result<Employee, WorkforceError>;

    async fn update_employee(
        &self,
        ctx: &AuthContext,
        id: EmployeeId,
        input: EmployeeInput,
    ) -> Result<Employee, WorkforceError>;

    /// Fails with `InUse` while allocations or time logs reference the employee.
    async fn delete_employee(&self, ctx: &AuthContext, id: EmployeeId)
        -> Result<(), WorkforceError>;

    // ========================================================================
    // Projects
    // ========================================================================

    async fn list_projects(&self) -> Result<Vec<Project>, WorkforceError>;

    async fn get_project(&self, id: ProjectId) -> Result<Project, WorkforceError>;

    async fn create_project(&self, ctx: &AuthContext, name: &str)
        -> Result<Project, WorkforceError>;

    async fn update_project(
        &self,
        ctx: &AuthContext,
        id: ProjectId,
        name: &str,
    ) -> Result<Project, WorkforceError>;

    /// Fails with `InUse` while tasks, allocations or time logs reference it.
    async fn delete_project(&self, ctx: &AuthContext, id: ProjectId)
        -> Result<(), WorkforceError>;

    // ========================================================================
    // Tasks
    // ========================================================================

    async fn list_tasks(&self, project_id: Option<ProjectId>) -> Result<Vec<Task>, WorkforceError>;

    async fn get_task(&self, id: TaskId) -> Result<Task, WorkforceError>;

    async fn create_task(&self, ctx: &AuthContext, task: NewTask) -> Result<Task, WorkforceError>;

    async fn update_task(
        &self,
        ctx: &AuthContext,
        id: TaskId,
        task: NewTask,
    ) -> Result<Task, WorkforceError>;

    /// Fails with `InUse` while allocations or time logs reference it.
    async fn delete_task(&self, ctx: &AuthContext, id: TaskId) -> Result<(), WorkforceError>;

    // ========================================================================
    // Allocations
    // ========================================================================

    async fn list_allocations(&self) -> Result<Vec<AllocationDetails>, WorkforceError>;

    async fn get_allocation(&self, id: AllocationId) -> Result<Allocation, WorkforceError>;

    async fn create_allocation(
        &self,
        ctx: &AuthContext,
        allocation: NewAllocation,
    ) -> Result<Allocation, WorkforceError>;

    async fn update_allocation(
        &self,
        ctx: &AuthContext,
        id: AllocationId,
        allocation: NewAllocation,
    ) -> Result<Allocation, WorkforceError>;

    async fn delete_allocation(
        &self,
        ctx: &AuthContext,
        id: AllocationId,
    ) -> Result<(), WorkforceError>;

    // ========================================================================
    // Time logs
    // ========================================================================

    async fn list_time_logs(
        &self,
        filter: TimeLogFilter,
    ) -> Result<Vec<TimeLogDetails>, WorkforceError>;

    async fn get_time_log(&self, id: TimeLogId) -> Result<TimeLog, WorkforceError>;

    async fn create_time_log(
        &self,
        ctx: &AuthContext,
        log: NewTimeLog,
    ) -> Result<TimeLog, WorkforceError>;

    async fn update_time_log(
        &self,
        ctx: &AuthContext,
        id: TimeLogId,
        log: NewTimeLog,
    ) -> Result<TimeLog, WorkforceError>;

    async fn delete_time_log(&self, ctx: &AuthContext, id: TimeLogId)
        -> Result<(), WorkforceError>;
}
