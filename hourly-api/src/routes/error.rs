use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{PeriodError, WorkforceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    InvalidReference,
    InUse,
    InvalidCredentials,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<WorkforceError> for ApiError {
    fn from(err: WorkforceError) -> Self {
        match err {
            WorkforceError::Validation(_) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::ValidationFailed)
            }
            WorkforceError::NotFound { .. } => Self::not_found(err.to_string()),
            WorkforceError::InvalidReference { .. } => {
                Self::unprocessable(err.to_string()).with_code(ErrorCode::InvalidReference)
            }
            WorkforceError::InUse { .. } => {
                Self::conflict(err.to_string()).with_code(ErrorCode::InUse)
            }
            WorkforceError::Conflict(_) => Self::conflict(err.to_string()),
            WorkforceError::InvalidCredentials => {
                Self::unauthorized("Invalid credentials").with_code(ErrorCode::InvalidCredentials)
            }
            WorkforceError::Forbidden => Self::forbidden(err.to_string()),
            WorkforceError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                Self::internal("internal server error")
            }
        }
    }
}

impl From<PeriodError> for ApiError {
    fn from(err: PeriodError) -> Self {
        Self::bad_request(err.to_string()).with_code(ErrorCode::ValidationFailed)
    }
}
