//! Outbound ports: persistence the domain needs from the entity store.

mod admins;
mod allocations;
mod employees;
mod projects;
mod tasks;
mod time_logs;

pub use admins::*;
pub use allocations::*;
pub use employees::*;
pub use projects::*;
pub use tasks::*;
pub use time_logs::*;

/// Every repository port at once, as implemented by a full entity store.
pub trait EntityStore:
    EmployeeRepository
    + ProjectRepository
    + TaskRepository
    + AllocationRepository
    + TimeLogRepository
    + AdminRepository
{
}

impl<T> EntityStore for T where
    T: EmployeeRepository
        + ProjectRepository
        + TaskRepository
        + AllocationRepository
        + TimeLogRepository
        + AdminRepository
{
}
