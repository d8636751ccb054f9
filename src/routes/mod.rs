pub mod event;
pub mod member;
pub mod message;

use axum::{
    Json, Router,
    routing::{delete, get},
};
use serde_json::{Value, json};

use crate::AppState;

/// Every API route, relative to the configured base URI.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // members
        .route(
            "/family-members",
            get(member::list_family_members).post(member::create_family_member),
        )
        .route(
            "/family-members/{id}",
            get(member::get_family_member).delete(member::delete_family_member),
        )
        // events
        .route("/events", get(event::list_events).post(event::create_event))
        .route("/events/{id}", delete(event::delete_event))
        // messages
        .route(
            "/messages",
            get(message::list_recent_messages).post(message::create_message),
        )
        .route("/messages/{member_id}", get(message::list_messages_for_member))
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Family Memories API" }))
}
