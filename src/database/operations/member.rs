use async_trait::async_trait;

use super::PgRepository;
use crate::error::StoreError;
use crate::models::{FamilyMember, NewFamilyMember};

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn list_family_members(&self) -> Result<Vec<FamilyMember>, StoreError>;

    async fn get_family_member(&self, id: i64) -> Result<Option<FamilyMember>, StoreError>;

    async fn create_family_member(
        &self,
        member: NewFamilyMember,
    ) -> Result<FamilyMember, StoreError>;

    /// Dependent messages are removed by the `ON DELETE CASCADE` foreign key.
    async fn delete_family_member(&self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
impl MemberRepository for PgRepository {
    async fn list_family_members(&self) -> Result<Vec<FamilyMember>, StoreError> {
        let members = sqlx::query_as::<_, FamilyMember>(
            r#"
            SELECT id, name, relationship, avatar_url, bio, birth_date,
                   is_registered, invite_code, family_id, created_by_member_id
            FROM family_members
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(members)
    }

    async fn get_family_member(&self, id: i64) -> Result<Option<FamilyMember>, StoreError> {
        let member = sqlx::query_as::<_, FamilyMember>(
            r#"
            SELECT id, name, relationship, avatar_url, bio, birth_date,
                   is_registered, invite_code, family_id, created_by_member_id
            FROM family_members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(member)
    }

    async fn create_family_member(
        &self,
        member: NewFamilyMember,
    ) -> Result<FamilyMember, StoreError> {
        let created = sqlx::query_as::<_, FamilyMember>(
            r#"
            INSERT INTO family_members
                (name, relationship, avatar_url, bio, birth_date,
                 is_registered, invite_code, family_id, created_by_member_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, relationship, avatar_url, bio, birth_date,
                      is_registered, invite_code, family_id, created_by_member_id
            "#,
        )
        .bind(member.name)
        .bind(member.relationship)
        .bind(member.avatar_url)
        .bind(member.bio)
        .bind(member.birth_date)
        .bind(member.is_registered)
        .bind(member.invite_code)
        .bind(member.family_id)
        .bind(member.created_by_member_id)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!("Inserted family member {}", created.id);
        Ok(created)
    }

    async fn delete_family_member(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM family_members WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
