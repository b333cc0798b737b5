mod allocation;
mod employee;
mod identity;
mod ids;
mod payroll;
mod project;
mod time_log;

pub use allocation::*;
pub use employee::*;
pub use identity::*;
pub use ids::*;
pub use payroll::*;
pub use project::*;
pub use time_log::*;
