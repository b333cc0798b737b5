use thiserror::Error;

/// Errors that can occur during workforce and payroll operations.
#[derive(Debug, Error, PartialEq)]
pub enum WorkforceError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i32 },
    #[error("invalid reference: {field} does not resolve")]
    InvalidReference { field: &'static str },
    #[error("still in use by {count} {referencing}")]
    InUse {
        referencing: &'static str,
        count: i64,
    },
    #[error("{0}")]
    Conflict(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("insufficient permissions")]
    Forbidden,
    #[error("{0}")]
    Internal(String),
}

impl WorkforceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<i32>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
