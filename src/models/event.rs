use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub is_recurring: bool,
    pub member_id: Option<i64>,
    pub custom_member_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "recurring_by_default")]
    pub is_recurring: bool,
    #[serde(default)]
    pub member_id: Option<i64>,
    #[serde(default)]
    pub custom_member_name: Option<String>,
}

fn recurring_by_default() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub id: i64,
}
