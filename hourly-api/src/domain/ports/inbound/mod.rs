//! Inbound ports: the use cases HTTP handlers invoke.

mod access;
mod payroll;
mod workforce;

pub use access::*;
pub use payroll::*;
pub use workforce::*;
