mod event;
mod member;
mod message;
mod user;

pub use event::{CreateEventResponse, Event, EventCreate};
pub use member::{CreateMemberResponse, FamilyMember, FamilyMemberCreate, NewFamilyMember};
pub use message::{CreateMessageResponse, Message, MessageCreate, MessageType};
pub use user::{User, UserCreate};

use serde::Serialize;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
