use async_trait::async_trait;

use super::PgRepository;
use crate::error::StoreError;
use crate::models::{Message, MessageCreate};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Messages owned by `member_id`, newest first.
    async fn list_messages_for_member(&self, member_id: i64) -> Result<Vec<Message>, StoreError>;

    /// The latest `limit` messages across all members, newest first.
    async fn list_recent_messages(&self, limit: i64) -> Result<Vec<Message>, StoreError>;

    async fn create_message(&self, message: MessageCreate) -> Result<Message, StoreError>;
}

#[async_trait]
impl MessageRepository for PgRepository {
    async fn list_messages_for_member(&self, member_id: i64) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, family_member_id, author_name, author_role, author_avatar,
                   content, "type", media_url, duration, created_at
            FROM messages
            WHERE family_member_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(self.pool())
        .await?;

        Ok(messages)
    }

    async fn list_recent_messages(&self, limit: i64) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, family_member_id, author_name, author_role, author_avatar,
                   content, "type", media_url, duration, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(messages)
    }

    async fn create_message(&self, message: MessageCreate) -> Result<Message, StoreError> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages
                (family_member_id, author_name, author_role, author_avatar,
                 content, "type", media_url, duration, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id, family_member_id, author_name, author_role, author_avatar,
                      content, "type", media_url, duration, created_at
            "#,
        )
        .bind(message.family_member_id)
        .bind(message.author_name)
        .bind(message.author_role)
        .bind(message.author_avatar)
        .bind(message.content)
        .bind(message.kind)
        .bind(message.media_url)
        .bind(message.duration)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(
            "Inserted message {} for member {}",
            created.id,
            created.family_member_id
        );
        Ok(created)
    }
}
