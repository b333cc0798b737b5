use std::ops::Deref;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    domain::models::{AuthContext, Identity},
    routes::ApiError,
};

use super::AuthSession;

/// Extracts the logged-in [`Identity`] from the session. Returns 401 if no
/// one is logged in.
///
/// Safe to log: `Identity`'s `Debug` impl redacts the password hash.
#[derive(Debug, Clone)]
pub struct AuthUser {
    identity: Identity,
}

impl AuthUser {
    /// Caller context passed into mutating service calls.
    pub fn context(&self) -> AuthContext {
        self.identity.context()
    }

    pub fn into_identity(self) -> Identity {
        self.identity
    }
}

impl Deref for AuthUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthSession: FromRequestParts<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_session = AuthSession::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::unauthorized("Not authenticated"))?;

        let identity = auth_session
            .user
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

        Ok(AuthUser { identity })
    }
}
