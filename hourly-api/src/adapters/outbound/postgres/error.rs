use sqlx::error::DatabaseError;
use thiserror::Error;

use crate::domain::WorkforceError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

impl RepositoryError {
    pub fn invalid_row(msg: impl Into<String>) -> Self {
        Self::InvalidRow(msg.into())
    }
}

/// The column a foreign-key constraint guards, from its `<table>_<column>_fkey` name.
fn referenced_field(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(name) if name.ends_with("employee_id_fkey") => "employee_id",
        Some(name) if name.ends_with("project_id_fkey") => "project_id",
        Some(name) if name.ends_with("task_id_fkey") => "task_id",
        _ => "id",
    }
}

fn unique_message(db: &dyn DatabaseError) -> String {
    match db.constraint() {
        Some(name) if name.ends_with("email_key") => "email is already in use".to_string(),
        _ => "record already exists".to_string(),
    }
}

impl From<RepositoryError> for WorkforceError {
    fn from(err: RepositoryError) -> Self {
        if let RepositoryError::DatabaseError(sqlx::Error::Database(db)) = &err {
            if db.is_unique_violation() {
                return WorkforceError::Conflict(unique_message(&**db));
            }
            if db.is_foreign_key_violation() {
                return WorkforceError::InvalidReference {
                    field: referenced_field(db.constraint()),
                };
            }
            if db.is_check_violation() {
                return WorkforceError::validation(db.message().to_string());
            }
        }

        tracing::error!("Repository error: {err}");
        WorkforceError::internal(err.to_string())
    }
}
