//! PostgreSQL implementation of every outbound repository port.

mod admins;
mod allocations;
mod employees;
mod error;
mod projects;
mod tasks;
mod time_logs;

use sqlx::{postgres::PgQueryResult, PgPool};

pub use error::RepositoryError;

use crate::domain::{models::EntityRef, services::integrity::check_deletable, WorkforceError};

/// Entity store backed by a shared connection pool.
#[derive(Clone)]
pub struct PgEntityStore {
    pool: PgPool,
}

impl PgEntityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Interpret the result of a `DELETE` of `target`.
    ///
    /// A foreign-key violation means a reference was added after the
    /// service-level check ran; report it the same way that check would.
    async fn deleted(
        &self,
        result: Result<PgQueryResult, sqlx::Error>,
        target: EntityRef,
    ) -> Result<bool, WorkforceError> {
        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => {
                check_deletable(self, target).await?;
                Err(WorkforceError::Conflict(format!(
                    "{} is still referenced",
                    target.kind()
                )))
            }
            Err(err) => Err(RepositoryError::from(err).into()),
        }
    }
}

/// Bind values for `employee_id = $1 OR project_id = $2 OR task_id = $3`,
/// with only the column matching `target` set.
fn reference_keys(target: EntityRef) -> (Option<i32>, Option<i32>, Option<i32>) {
    match target {
        EntityRef::Employee(id) => (Some(id.as_i32()), None, None),
        EntityRef::Project(id) => (None, Some(id.as_i32()), None),
        EntityRef::Task(id) => (None, None, Some(id.as_i32())),
    }
}
