use async_trait::async_trait;

use super::PgRepository;
use crate::error::StoreError;
use crate::models::{Event, EventCreate};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError>;

    async fn create_event(&self, event: EventCreate) -> Result<Event, StoreError>;

    async fn delete_event(&self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
impl EventRepository for PgRepository {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, date, "type", description, is_recurring,
                   member_id, custom_member_name
            FROM events
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(events)
    }

    async fn create_event(&self, event: EventCreate) -> Result<Event, StoreError> {
        let created = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events
                (title, date, "type", description, is_recurring, member_id, custom_member_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, date, "type", description, is_recurring,
                      member_id, custom_member_name
            "#,
        )
        .bind(event.title)
        .bind(event.date)
        .bind(event.kind)
        .bind(event.description)
        .bind(event.is_recurring)
        .bind(event.member_id)
        .bind(event.custom_member_name)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!("Inserted event {}", created.id);
        Ok(created)
    }

    async fn delete_event(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
