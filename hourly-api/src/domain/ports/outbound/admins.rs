use async_trait::async_trait;

use crate::domain::{
    models::{Admin, AdminId},
    Email, WorkforceError,
};

/// Outbound port for admin accounts.
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    async fn get_admin(&self, id: AdminId) -> Result<Option<Admin>, WorkforceError>;

    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, WorkforceError>;

    async fn count_admins(&self) -> Result<i64, WorkforceError>;

    async fn create_admin(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<Admin, WorkforceError>;
}
