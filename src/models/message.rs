use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "message_type", rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Audio,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub family_member_id: i64,
    pub author_name: String,
    pub author_role: String,
    pub author_avatar: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: MessageType,
    pub media_url: Option<String>,
    /// Length of audio/video content in seconds.
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageCreate {
    pub family_member_id: i64,
    pub author_name: String,
    pub author_role: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageResponse {
    pub id: i64,
}
