use async_trait::async_trait;

use super::PgRepository;
use crate::error::StoreError;
use crate::models::{User, UserCreate};
use crate::utils::hash_password;

/// Account storage kept for the upcoming login flow; no route calls it yet.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores the user with a bcrypt hash in place of the plain password.
    async fn create_user(&self, user: UserCreate) -> Result<User, StoreError>;

    async fn get_user_by_contact(&self, phone_or_email: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
impl UserRepository for PgRepository {
    async fn create_user(&self, user: UserCreate) -> Result<User, StoreError> {
        let password_hash = hash_password(&user.password)?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (phone_or_email, name, relationship, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, phone_or_email, name, relationship, password_hash
            "#,
        )
        .bind(user.phone_or_email)
        .bind(user.name)
        .bind(user.relationship)
        .bind(password_hash)
        .fetch_one(self.pool())
        .await?;

        tracing::info!("Created user {}", created.id);
        Ok(created)
    }

    async fn get_user_by_contact(&self, phone_or_email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, phone_or_email, name, relationship, password_hash
            FROM users
            WHERE phone_or_email = $1
            "#,
        )
        .bind(phone_or_email)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }
}
