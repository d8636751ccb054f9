mod handler;

pub use handler::{create_message, list_messages_for_member, list_recent_messages};
