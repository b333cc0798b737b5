use async_trait::async_trait;

use crate::domain::{
    models::{Admin, AdminId},
    ports::outbound::AdminRepository,
    Email, WorkforceError,
};

use super::{PgEntityStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i32,
    email: String,
    password_hash: String,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(row.email.as_str())
            .map_err(|e| RepositoryError::invalid_row(e.to_string()))?;

        Ok(Admin {
            id: AdminId::new(row.id),
            email,
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl AdminRepository for PgEntityStore {
    async fn get_admin(&self, id: AdminId) -> Result<Option<Admin>, WorkforceError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash FROM admins WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Admin::try_from).transpose()?)
    }

    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, WorkforceError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash FROM admins WHERE email = $1",
        )
        .bind(&**email)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(Admin::try_from).transpose()?)
    }

    async fn count_admins(&self) -> Result<i64, WorkforceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(count)
    }

    async fn create_admin(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<Admin, WorkforceError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(&**email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(Admin::try_from(row)?)
    }
}
