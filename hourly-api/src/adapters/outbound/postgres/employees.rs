use async_trait::async_trait;

use crate::domain::{
    models::{Employee, EmployeeId, EmployeeRecord, EntityRef},
    ports::outbound::EmployeeRepository,
    Email, WorkforceError,
};

use super::{PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    name: String,
    hourly_rate: f64,
    email: Option<String>,
    password_hash: Option<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RepositoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let email = row
            .email
            .as_deref()
            .map(Email::try_from)
            .transpose()
            .map_err(|e| RepositoryError::invalid_row(e.to_string()))?;

        Ok(Employee {
            id: EmployeeId::new(row.id),
            name: row.name,
            hourly_rate: row.hourly_rate,
            email,
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl EmployeeRepository for PgEntityStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, WorkforceError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, hourly_rate, email, password_hash
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows
            .into_iter()
            .map(Employee::try_from)
            .collect::<Result<_, _>>()?)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, WorkforceError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, hourly_rate, email, password_hash
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Employee::try_from).transpose()?)
    }

    async fn find_employee_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, WorkforceError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, hourly_rate, email, password_hash
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(&**email)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Employee::try_from).transpose()?)
    }

    async fn create_employee(
        &self,
        employee: &EmployeeRecord,
    ) -> Result<Employee, WorkforceError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (name, hourly_rate, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, hourly_rate, email, password_hash
            "#,
        )
        .bind(&employee.name)
        .bind(employee.hourly_rate)
        .bind(employee.email.as_deref())
        .bind(employee.password_hash.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(Employee::try_from(row)?)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        employee: &EmployeeRecord,
    ) -> Result<Option<Employee>, WorkforceError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET name = $2,
                hourly_rate = $3,
                email = $4,
                password_hash = COALESCE($5, password_hash)
            WHERE id = $1
            RETURNING id, name, hourly_rate, email, password_hash
            "#,
        )
        .bind(id.as_i32())
        .bind(&employee.name)
        .bind(employee.hourly_rate)
        .bind(employee.email.as_deref())
        .bind(employee.password_hash.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Employee::try_from).transpose()?)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, WorkforceError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await;

        self.deleted(result, EntityRef::Employee(id)).await
    }
}
