mod email;
mod error;
pub mod models;
pub mod password;
pub mod payroll;
mod period;
pub mod ports;
pub mod services;

pub use email::*;
pub use error::*;
pub use period::*;
