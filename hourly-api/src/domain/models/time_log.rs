use time::{Date, Time};

use crate::domain::PayPeriod;

use super::{EmployeeId, ProjectId, TaskId, TimeLogId};

/// An interval actually worked by an employee on a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLog {
    pub id: TimeLogId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
}

impl TimeLog {
    /// Hours between start and end; zero when the end is not after the start.
    pub fn worked_hours(&self) -> f64 {
        crate::domain::payroll::worked_hours(self.start_time, self.end_time)
    }
}

/// A time log joined with names and the employee's current hourly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogDetails {
    pub log: TimeLog,
    pub employee_name: String,
    pub project_name: String,
    pub task_name: String,
    pub hourly_rate: f64,
}

/// Fields for creating or replacing a time log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeLog {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
}

/// Narrows a time log listing. Empty filter lists everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeLogFilter {
    pub employee_id: Option<EmployeeId>,
    pub period: Option<PayPeriod>,
}

impl TimeLogFilter {
    pub fn for_period(period: PayPeriod) -> Self {
        Self {
            employee_id: None,
            period: Some(period),
        }
    }

    pub fn matches(&self, log: &TimeLog) -> bool {
        self.employee_id.map_or(true, |id| id == log.employee_id)
            && self.period.map_or(true, |period| period.contains(log.date))
    }
}
