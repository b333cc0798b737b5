use std::fmt;

use crate::domain::Email;

use super::EmployeeId;

/// A person whose logged time is paid at `hourly_rate`.
#[derive(Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub hourly_rate: f64,
    pub email: Option<Email>,
    /// Argon2 PHC string. Employees without one cannot log in.
    pub password_hash: Option<String>,
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("hourly_rate", &self.hourly_rate)
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Raw employee fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeInput {
    pub name: String,
    pub hourly_rate: Option<f64>,
    pub email: Option<String>,
    /// Plain-text password. `None` on update keeps the stored hash.
    pub password: Option<String>,
}

/// Validated employee fields ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub name: String,
    pub hourly_rate: f64,
    pub email: Option<Email>,
    /// `None` on update keeps the stored hash.
    pub password_hash: Option<String>,
}
