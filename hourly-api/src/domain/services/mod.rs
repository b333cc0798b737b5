mod access;
pub mod integrity;
mod payroll;
mod workforce;

pub use access::AccessGateImpl;
pub use payroll::PayrollServiceImpl;
pub use workforce::WorkforceServiceImpl;
