mod handler;

pub use handler::{create_event, delete_event, list_events};
