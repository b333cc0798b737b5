use async_trait::async_trait;

use crate::domain::{
    models::{Identity, IdentityKey},
    WorkforceError,
};

/// Inbound port for credential checks.
#[async_trait]
pub trait AccessGate: Send + Sync + 'static {
    /// Check `email`/`password` against admins first, then employees.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Identity, WorkforceError>;

    /// Reload the identity a session points at. `None` if it no longer exists
    /// or can no longer log in.
    async fn identity(&self, key: &IdentityKey) -> Result<Option<Identity>, WorkforceError>;

    /// Create the given admin if there are no admins yet. Returns whether one
    /// was created.
    async fn ensure_default_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, WorkforceError>;
}
