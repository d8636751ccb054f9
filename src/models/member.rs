use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted family member row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FamilyMember {
    pub id: i64,
    pub name: String,
    pub relationship: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub is_registered: bool,
    pub invite_code: String,
    #[serde(rename = "familyId")]
    pub family_id: Option<i64>,
    #[serde(rename = "createdByMemberId")]
    pub created_by_member_id: Option<i64>,
}

/// Fields a client may submit when adding a member.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyMemberCreate {
    pub name: String,
    pub relationship: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default, rename = "familyId")]
    pub family_id: Option<i64>,
    #[serde(default, rename = "createdByMemberId")]
    pub created_by_member_id: Option<i64>,
}

/// Insert payload: a create request whose invite code has been resolved.
#[derive(Debug, Clone)]
pub struct NewFamilyMember {
    pub name: String,
    pub relationship: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub is_registered: bool,
    pub invite_code: String,
    pub family_id: Option<i64>,
    pub created_by_member_id: Option<i64>,
}

impl FamilyMemberCreate {
    /// Keeps a submitted non-empty invite code, otherwise takes one from `generate`.
    pub fn into_new_member<F>(self, generate: F) -> NewFamilyMember
    where
        F: FnOnce() -> String,
    {
        let invite_code = match self.invite_code {
            Some(code) if !code.trim().is_empty() => code,
            _ => generate(),
        };

        NewFamilyMember {
            name: self.name,
            relationship: self.relationship,
            avatar_url: self.avatar_url,
            bio: self.bio,
            birth_date: self.birth_date,
            is_registered: self.is_registered,
            invite_code,
            family_id: self.family_id,
            created_by_member_id: self.created_by_member_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateMemberResponse {
    pub id: i64,
    pub linked: bool,
    #[serde(rename = "inviteCode", skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

impl CreateMemberResponse {
    pub fn created(member: &FamilyMember) -> Self {
        Self {
            id: member.id,
            linked: false,
            invite_code: Some(member.invite_code.clone()),
        }
    }

    pub fn linked(id: i64) -> Self {
        Self {
            id,
            linked: true,
            invite_code: None,
        }
    }
}
