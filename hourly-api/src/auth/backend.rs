use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use axum_login::{AuthnBackend, AuthzBackend, UserId};
use serde::Deserialize;

use crate::domain::{
    models::{Identity, Role},
    ports::inbound::AccessGate,
    WorkforceError,
};

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keeps the password out of `#[instrument]` spans.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Workforce(#[from] WorkforceError),
}

/// Session backend that checks credentials through the [`AccessGate`].
#[derive(Clone)]
pub struct AuthBackend {
    gate: Arc<dyn AccessGate>,
}

impl std::fmt::Debug for AuthBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthBackend").finish_non_exhaustive()
    }
}

impl AuthBackend {
    pub fn new(gate: Arc<dyn AccessGate>) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl AuthnBackend for AuthBackend {
    type User = Identity;
    type Credentials = Credentials;
    type Error = BackendError;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        match self.gate.authenticate(&creds.email, &creds.password).await {
            Ok(identity) => Ok(Some(identity)),
            Err(WorkforceError::InvalidCredentials) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn get_user(
        &self,
        key: &UserId<Self>,
    ) -> Result<Option<Self::User>, Self::Error> {
        Ok(self.gate.identity(key).await?)
    }
}

#[async_trait]
impl AuthzBackend for AuthBackend {
    type Permission = Role;

    async fn get_user_permissions(
        &self,
        user: &Self::User,
    ) -> Result<HashSet<Self::Permission>, Self::Error> {
        Ok(HashSet::from([user.role]))
    }
}

pub type AuthSession = axum_login::AuthSession<AuthBackend>;
