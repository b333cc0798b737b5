use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares an identifier newtype over a database `SERIAL` column.
macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub fn new(id: i32) -> Self {
                Self(id)
            }

            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

serial_id!(
    /// Identifier of a row in `employees`.
    EmployeeId
);
serial_id!(
    /// Identifier of a row in `projects`.
    ProjectId
);
serial_id!(
    /// Identifier of a row in `tasks`.
    TaskId
);
serial_id!(
    /// Identifier of a row in `allocations`.
    AllocationId
);
serial_id!(
    /// Identifier of a row in `time_logs`.
    TimeLogId
);
serial_id!(
    /// Identifier of a row in `admins`. Admin ids overlap with employee ids.
    AdminId
);

/// An entity that other rows may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Employee(EmployeeId),
    Project(ProjectId),
    Task(TaskId),
}

impl EntityRef {
    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::Employee(_) => "employee",
            EntityRef::Project(_) => "project",
            EntityRef::Task(_) => "task",
        }
    }
}
