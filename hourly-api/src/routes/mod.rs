pub(crate) mod allocations;
pub(crate) mod employees;
pub(crate) mod error;
pub(crate) mod projects;
pub(crate) mod reports;
pub(crate) mod tasks;
pub(crate) mod time_logs;

pub(crate) use error::ApiError;
