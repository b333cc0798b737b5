use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{AllocationId, EmployeeId, ProjectId, TaskId};

/// Progress of a planned allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
pub enum AllocationStatus {
    #[default]
    #[strum(serialize = "Not Yet Started")]
    #[serde(rename = "Not Yet Started")]
    NotYetStarted,
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[strum(serialize = "Completed")]
    #[serde(rename = "Completed")]
    Completed,
}

/// Hours planned for an employee on a task for a given day.
///
/// Distinct from a [`TimeLog`](super::TimeLog), which records what was
/// actually worked.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub id: AllocationId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub allocated_hours: f64,
    pub date: Date,
    pub status: AllocationStatus,
}

/// An allocation joined with the names of everything it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationDetails {
    pub allocation: Allocation,
    pub employee_name: String,
    pub project_name: String,
    pub task_name: String,
}

/// Fields for creating or replacing an allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAllocation {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub task_id: TaskId,
    pub allocated_hours: f64,
    pub date: Date,
    pub status: AllocationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_uses_display_names() {
        assert_eq!(AllocationStatus::default().to_string(), "Not Yet Started");
        assert_eq!(
            AllocationStatus::from_str("In Progress").unwrap(),
            AllocationStatus::InProgress
        );
        assert!(AllocationStatus::from_str("Done").is_err());
    }

    #[test]
    fn status_serializes_like_display() {
        let json = serde_json::to_string(&AllocationStatus::Completed).unwrap();
        assert_eq!(json, "\"Completed\"");
    }
}
