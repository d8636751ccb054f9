use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account placeholder; no route reads or writes users yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub phone_or_email: String,
    pub name: String,
    pub relationship: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub phone_or_email: String,
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,
    pub password: String,
}
