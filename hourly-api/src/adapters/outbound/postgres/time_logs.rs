use async_trait::async_trait;
use time::{Date, Time};

use crate::domain::{
    models::{EntityRef, NewTimeLog, TimeLog, TimeLogDetails, TimeLogFilter, TimeLogId},
    ports::outbound::TimeLogRepository,
    WorkforceError,
};

use super::{reference_keys, PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct TimeLogRow {
    id: i32,
    employee_id: i32,
    project_id: i32,
    task_id: i32,
    date: Date,
    start_time: Time,
    end_time: Time,
}

#[derive(sqlx::FromRow)]
struct TimeLogDetailsRow {
    #[sqlx(flatten)]
    log: TimeLogRow,
    employee_name: String,
    project_name: String,
    task_name: String,
    hourly_rate: f64,
}

impl From<TimeLogRow> for TimeLog {
    fn from(row: TimeLogRow) -> Self {
        TimeLog {
            id: row.id.into(),
            employee_id: row.employee_id.into(),
            project_id: row.project_id.into(),
            task_id: row.task_id.into(),
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

impl From<TimeLogDetailsRow> for TimeLogDetails {
    fn from(row: TimeLogDetailsRow) -> Self {
        TimeLogDetails {
            log: row.log.into(),
            employee_name: row.employee_name,
            project_name: row.project_name,
            task_name: row.task_name,
            hourly_rate: row.hourly_rate,
        }
    }
}

#[async_trait]
impl TimeLogRepository for PgEntityStore {
    async fn list_time_logs(
        &self,
        filter: &TimeLogFilter,
    ) -> Result<Vec<TimeLogDetails>, WorkforceError> {
        let range = filter.period.map(|period| period.date_range());

        let rows = sqlx::query_as::<_, TimeLogDetailsRow>(
            r#"
            SELECT tl.id, tl.employee_id, tl.project_id, tl.task_id, tl.date,
                   tl.start_time, tl.end_time, e.name AS employee_name,
                   p.name AS project_name, t.name AS task_name, e.hourly_rate
            FROM time_logs tl
            JOIN employees e ON tl.employee_id = e.id
            JOIN projects p ON tl.project_id = p.id
            JOIN tasks t ON tl.task_id = t.id
            WHERE ($1::INTEGER IS NULL OR tl.employee_id = $1)
              AND ($2::DATE IS NULL OR tl.date BETWEEN $2 AND $3::DATE)
            ORDER BY tl.date DESC, tl.id
            "#,
        )
        .bind(filter.employee_id.map(|id| id.as_i32()))
        .bind(range.map(|(first, _)| first))
        .bind(range.map(|(_, last)| last))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows.into_iter().map(TimeLogDetails::from).collect())
    }

    async fn get_time_log(&self, id: TimeLogId) -> Result<Option<TimeLog>, WorkforceError> {
        let row = sqlx::query_as::<_, TimeLogRow>(
            r#"
            SELECT id, employee_id, project_id, task_id, date, start_time, end_time
            FROM time_logs
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(TimeLog::from))
    }

    async fn create_time_log(&self, log: &NewTimeLog) -> Result<TimeLog, WorkforceError> {
        let row = sqlx::query_as::<_, TimeLogRow>(
            r#"
            INSERT INTO time_logs
                (employee_id, project_id, task_id, date, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employee_id, project_id, task_id, date, start_time, end_time
            "#,
        )
        .bind(log.employee_id.as_i32())
        .bind(log.project_id.as_i32())
        .bind(log.task_id.as_i32())
        .bind(log.date)
        .bind(log.start_time)
        .bind(log.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.into())
    }

    async fn update_time_log(
        &self,
        id: TimeLogId,
        log: &NewTimeLog,
    ) -> Result<Option<TimeLog>, WorkforceError> {
        let row = sqlx::query_as::<_, TimeLogRow>(
            r#"
            UPDATE time_logs
            SET employee_id = $2,
                project_id = $3,
                task_id = $4,
                date = $5,
                start_time = $6,
                end_time = $7
            WHERE id = $1
            RETURNING id, employee_id, project_id, task_id, date, start_time, end_time
            "#,
        )
        .bind(id.as_i32())
        .bind(log.employee_id.as_i32())
        .bind(log.project_id.as_i32())
        .bind(log.task_id.as_i32())
        .bind(log.date)
        .bind(log.start_time)
        .bind(log.end_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(TimeLog::from))
    }

    async fn delete_time_log(&self, id: TimeLogId) -> Result<bool, WorkforceError> {
        let result = sqlx::query("DELETE FROM time_logs WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_time_logs_referencing(
        &self,
        target: EntityRef,
    ) -> Result<i64, WorkforceError> {
        let (employee_id, project_id, task_id) = reference_keys(target);
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM time_logs
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
