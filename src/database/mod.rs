// Persistence gateway.
// One async method per access pattern; each issues a single query and returns
// store failures unchanged.

pub mod operations;
pub mod schema;

pub use operations::{
    EventRepository, MemberRepository, MessageRepository, PgRepository, UserRepository,
};

/// Everything the HTTP layer needs from the datastore.
pub trait Repository:
    MemberRepository + EventRepository + MessageRepository + UserRepository
{
}

impl<T> Repository for T where
    T: MemberRepository + EventRepository + MessageRepository + UserRepository
{
}
