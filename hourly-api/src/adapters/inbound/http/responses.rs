//! HTTP response types for the workforce and payroll endpoints.
//!
//! Field names are snake_case, dates are `YYYY-MM-DD` and clock times `HH:MM`.

use serde::Serialize;

use crate::domain::{
    format_clock_time, format_date,
    models::{
        Allocation, AllocationDetails, AllocationId, AllocationStatus, Employee, EmployeeId,
        Identity, PayrollReport, PayrollRow, Project, ProjectId, Role, Task, TaskId, TimeLog,
        TimeLogDetails, TimeLogId,
    },
    payroll::round_cents,
};

/// Employee without credentials.
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub name: String,
    pub hourly_rate: f64,
    pub email: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            hourly_rate: employee.hourly_rate,
            email: employee.email.map(|email| email.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub name: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            project_id: task.project_id,
            name: task.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub id: AllocationId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub allocated_hours: f64,
    pub date: String,
    pub status: AllocationStatus,
}

impl From<Allocation> for AllocationResponse {
    fn from(allocation: Allocation) -> Self {
        Self {
            id: allocation.id,
            employee_id: allocation.employee_id,
            project_id: allocation.project_id,
            task_id: allocation.task_id,
            allocated_hours: allocation.allocated_hours,
            date: format_date(allocation.date),
            status: allocation.status,
        }
    }
}

/// Allocation list entry, flattened with the referenced names.
#[derive(Debug, Serialize)]
pub struct AllocationDetailsResponse {
    #[serde(flatten)]
    pub allocation: AllocationResponse,
    pub employee_name: String,
    pub project_name: String,
    pub task_name: String,
}

impl From<AllocationDetails> for AllocationDetailsResponse {
    fn from(details: AllocationDetails) -> Self {
        Self {
            allocation: details.allocation.into(),
            employee_name: details.employee_name,
            project_name: details.project_name,
            task_name: details.task_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimeLogResponse {
    pub id: TimeLogId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub worked_hours: f64,
}

impl From<TimeLog> for TimeLogResponse {
    fn from(log: TimeLog) -> Self {
        Self {
            id: log.id,
            employee_id: log.employee_id,
            project_id: log.project_id,
            task_id: log.task_id,
            date: format_date(log.date),
            start_time: format_clock_time(log.start_time),
            end_time: format_clock_time(log.end_time),
            worked_hours: round_cents(log.worked_hours()),
        }
    }
}

/// Time log list entry with names and the employee's current hourly rate.
#[derive(Debug, Serialize)]
pub struct TimeLogDetailsResponse {
    #[serde(flatten)]
    pub log: TimeLogResponse,
    pub employee_name: String,
    pub project_name: String,
    pub task_name: String,
    pub hourly_rate: f64,
}

impl From<TimeLogDetails> for TimeLogDetailsResponse {
    fn from(details: TimeLogDetails) -> Self {
        Self {
            log: details.log.into(),
            employee_name: details.employee_name,
            project_name: details.project_name,
            task_name: details.task_name,
            hourly_rate: details.hourly_rate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            role: identity.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayrollRowResponse {
    pub employee_id: EmployeeId,
    pub name: String,
    pub hourly_rate: f64,
    pub total_hours: f64,
    pub total_pay: f64,
}

impl From<PayrollRow> for PayrollRowResponse {
    fn from(row: PayrollRow) -> Self {
        Self {
            employee_id: row.employee_id,
            name: row.name,
            hourly_rate: row.hourly_rate,
            total_hours: row.total_hours,
            total_pay: row.total_pay,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayrollReportResponse {
    /// `YYYY-MM`.
    pub month: String,
    pub rows: Vec<PayrollRowResponse>,
    pub total_hours: f64,
    pub total_payout: f64,
}

impl From<PayrollReport> for PayrollReportResponse {
    fn from(report: PayrollReport) -> Self {
        Self {
            month: report.period.to_string(),
            rows: report.rows.into_iter().map(Into::into).collect(),
            total_hours: report.total_hours,
            total_payout: report.total_payout,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
