use async_trait::async_trait;

use crate::domain::{
    models::{Employee, EmployeeId, EmployeeRecord},
    Email, WorkforceError,
};

/// Outbound port for employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// All employees ordered by id.
    async fn list_employees(&self) -> Result<Vec<Employee>, WorkforceError>;

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, WorkforceError>;

    async fn find_employee_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, WorkforceError>;

    /// Fails with `Conflict` if the email is already taken.
    async fn create_employee(&self, employee: &EmployeeRecord)
        -> Result<Employee, WorkforceError>;

    /// Replace name, rate and email. The password hash is only replaced when
    /// `employee.password_hash` is set. Returns `None` if no such employee.
    async fn update_employee(
        &self,
        id: EmployeeId,
        employee: &EmployeeRecord,
    ) -> Result<Option<Employee>, WorkforceError>;

    /// Returns whether a row was deleted.
    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, WorkforceError>;
}
