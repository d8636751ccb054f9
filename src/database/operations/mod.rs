mod event;
mod member;
mod message;
mod user;

pub use event::EventRepository;
pub use member::MemberRepository;
pub use message::MessageRepository;
pub use user::UserRepository;

use sqlx::PgPool;

/// Postgres-backed gateway. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
