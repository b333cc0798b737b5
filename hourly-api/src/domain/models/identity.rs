use std::fmt;

use axum_login::AuthUser;
use serde::{Deserialize, Serialize};

use crate::domain::{Email, WorkforceError};

use super::{AdminId, EmployeeId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_str = match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        };
        write!(f, "{role_str}")
    }
}

/// A row in `admins`. Separate identity space from employees.
#[derive(Clone, PartialEq)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    pub password_hash: String,
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// Session key for an identity. Admin and employee ids overlap, so the role
/// is part of the key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub role: Role,
    pub id: i32,
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.id)
    }
}

/// An authenticated admin or employee.
#[derive(Clone, PartialEq, Serialize)]
pub struct Identity {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Stored password hash; rotating the password invalidates sessions.
    #[serde(skip)]
    pub session_auth_hash: String,
}

impl Identity {
    pub fn key(&self) -> IdentityKey {
        IdentityKey {
            role: self.role,
            id: self.id,
        }
    }

    pub fn context(&self) -> AuthContext {
        AuthContext {
            role: self.role,
            id: self.id,
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("session_auth_hash", &"[redacted]")
            .finish()
    }
}

impl AuthUser for Identity {
    type Id = IdentityKey;

    fn id(&self) -> Self::Id {
        self.key()
    }

    fn session_auth_hash(&self) -> &[u8] {
        self.session_auth_hash.as_bytes()
    }
}

/// The caller of a mutating operation, passed into every service call that
/// changes state so role checks happen next to the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub role: Role,
    pub id: i32,
}

impl AuthContext {
    pub fn admin(id: impl Into<i32>) -> Self {
        Self {
            role: Role::Admin,
            id: id.into(),
        }
    }

    pub fn employee(id: EmployeeId) -> Self {
        Self {
            role: Role::Employee,
            id: id.as_i32(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), WorkforceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WorkforceError::Forbidden)
        }
    }

    /// Admins act for anyone; employees only for themselves.
    pub fn require_actor_for(&self, employee_id: EmployeeId) -> Result<(), WorkforceError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::Employee if self.id == employee_id.as_i32() => Ok(()),
            Role::Employee => Err(WorkforceError::Forbidden),
        }
    }
}
