use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Admin, AdminId, Employee, EmployeeId, Identity, IdentityKey, Role},
    password::{hash_password, verify_password},
    ports::{inbound::AccessGate, outbound::EntityStore},
    Email, WorkforceError,
};

/// Display name given to every admin identity.
const ADMIN_NAME: &str = "Admin";

pub struct AccessGateImpl<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> AccessGateImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn admin_identity(admin: Admin) -> Identity {
    Identity {
        id: admin.id.as_i32(),
        email: admin.email.to_string(),
        name: ADMIN_NAME.to_string(),
        role: Role::Admin,
        session_auth_hash: admin.password_hash,
    }
}

/// Employees without both an email and a password cannot log in.
fn employee_identity(employee: Employee) -> Option<Identity> {
    Some(Identity {
        id: employee.id.as_i32(),
        email: employee.email?.to_string(),
        name: employee.name,
        role: Role::Employee,
        session_auth_hash: employee.password_hash?,
    })
}

#[async_trait]
impl<S: EntityStore> AccessGate for AccessGateImpl<S> {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, WorkforceError> {
        let Ok(email) = Email::try_from(email) else {
            return Err(WorkforceError::InvalidCredentials);
        };

        // Admins and employees are separate accounts that may share an email.
        if let Some(admin) = self.store.find_admin_by_email(&email).await? {
            if verify_password(password, &admin.password_hash) {
                return Ok(admin_identity(admin));
            }
        }

        let identity = self
            .store
            .find_employee_by_email(&email)
            .await?
            .and_then(employee_identity)
            .filter(|identity| verify_password(password, &identity.session_auth_hash));

        identity.ok_or(WorkforceError::InvalidCredentials)
    }

    async fn identity(&self, key: &IdentityKey) -> Result<Option<Identity>, WorkforceError> {
        match key.role {
            Role::Admin => Ok(self
                .store
                .get_admin(AdminId::new(key.id))
                .await?
                .map(admin_identity)),
            Role::Employee => Ok(self
                .store
                .get_employee(EmployeeId::new(key.id))
                .await?
                .and_then(employee_identity)),
        }
    }

    async fn ensure_default_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, WorkforceError> {
        if self.store.count_admins().await? > 0 {
            return Ok(false);
        }

        let email = Email::try_from(email).map_err(|e| WorkforceError::validation(e.to_string()))?;
        let hash = hash_password(password)?;
        self.store.create_admin(&email, &hash).await?;

        tracing::info!(%email, "created default admin");
        Ok(true)
    }
}
