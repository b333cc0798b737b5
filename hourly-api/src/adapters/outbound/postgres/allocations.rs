use std::str::FromStr;

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{
        Allocation, AllocationDetails, AllocationId, AllocationStatus, EntityRef, NewAllocation,
    },
    ports::outbound::AllocationRepository,
    WorkforceError,
};

use super::{reference_keys, PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct AllocationRow {
    id: i32,
    employee_id: i32,
    project_id: i32,
    task_id: i32,
    allocated_hours: f64,
    date: Date,
    status: String,
}

#[derive(sqlx::FromRow)]
struct AllocationDetailsRow {
    #[sqlx(flatten)]
    allocation: AllocationRow,
    employee_name: String,
    project_name: String,
    task_name: String,
}

impl TryFrom<AllocationRow> for Allocation {
    type Error = RepositoryError;

    fn try_from(row: AllocationRow) -> Result<Self, Self::Error> {
        let status = AllocationStatus::from_str(&row.status).map_err(|_| {
            RepositoryError::invalid_row(format!("unknown allocation status '{}'", row.status))
        })?;

        Ok(Allocation {
            id: row.id.into(),
            employee_id: row.employee_id.into(),
            project_id: row.project_id.into(),
            task_id: row.task_id.into(),
            allocated_hours: row.allocated_hours,
            date: row.date,
            status,
        })
    }
}

impl TryFrom<AllocationDetailsRow> for AllocationDetails {
    type Error = RepositoryError;

    fn try_from(row: AllocationDetailsRow) -> Result<Self, Self::Error> {
        Ok(AllocationDetails {
            allocation: row.allocation.try_into()?,
            employee_name: row.employee_name,
            project_name: row.project_name,
            task_name: row.task_name,
        })
    }
}

#[async_trait]
impl AllocationRepository for PgEntityStore {
    async fn list_allocations(&self) -> Result<Vec<AllocationDetails>, WorkforceError> {
        let rows = sqlx::query_as::<_, AllocationDetailsRow>(
            r#"
            SELECT a.id, a.employee_id, a.project_id, a.task_id, a.allocated_hours, a.date,
                   a.status, e.name AS employee_name, p.name AS project_name,
                   t.name AS task_name
            FROM allocations a
            JOIN employees e ON a.employee_id = e.id
            JOIN projects p ON a.project_id = p.id
            JOIN tasks t ON a.task_id = t.id
            ORDER BY a.date DESC, a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows
            .into_iter()
            .map(AllocationDetails::try_from)
            .collect::<Result<_, _>>()?)
    }

    async fn get_allocation(
        &self,
        id: AllocationId,
    ) -> Result<Option<Allocation>, WorkforceError> {
        let row = sqlx::query_as::<_, AllocationRow>(
            r#"
            SELECT id, employee_id, project_id, task_id, allocated_hours, date, status
            FROM allocations
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Allocation::try_from).transpose()?)
    }

    async fn create_allocation(
        &self,
        allocation: &NewAllocation,
    ) -> Result<Allocation, WorkforceError> {
        let row = sqlx::query_as::<_, AllocationRow>(
            r#"
            INSERT INTO allocations
                (employee_id, project_id, task_id, allocated_hours, date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employee_id, project_id, task_id, allocated_hours, date, status
            "#,
        )
        .bind(allocation.employee_id.as_i32())
        .bind(allocation.project_id.as_i32())
        .bind(allocation.task_id.as_i32())
        .bind(allocation.allocated_hours)
        .bind(allocation.date)
        .bind(allocation.status.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(Allocation::try_from(row)?)
    }

    async fn update_allocation(
        &self,
        id: AllocationId,
        allocation: &NewAllocation,
    ) -> Result<Option<Allocation>, WorkforceError> {
        let row = sqlx::query_as::<_, AllocationRow>(
            r#"
            UPDATE allocations
            SET employee_id = $2,
                project_id = $3,
                task_id = $4,
                allocated_hours = $5,
                date = $6,
                status = $7
            WHERE id = $1
            RETURNING id, employee_id, project_id, task_id, allocated_hours, date, status
            "#,
        )
        .bind(id.as_i32())
        .bind(allocation.employee_id.as_i32())
        .bind(allocation.project_id.as_i32())
        .bind(allocation.task_id.as_i32())
        .bind(allocation.allocated_hours)
        .bind(allocation.date)
        .bind(allocation.status.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Allocation::try_from).transpose()?)
    }

    async fn delete_allocation(&self, id: AllocationId) -> Result<bool, WorkforceError> {
        let result = sqlx::query("DELETE FROM allocations WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_allocations_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError> {
        let (employee_id, project_id, task_id) = reference_keys(target);
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM allocations
            WHERE employee_id = $1 OR project_id = $2 OR task_id = $3
            "#,
        )
        .bind(employee_id)
        .bind(project_id)
        .bind(task_id)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(count)
    }
}
