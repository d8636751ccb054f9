use sqlx::PgPool;
use tracing::info;

/// Idempotent DDL for the four tables. Safe to run on every start.
const SCHEMA: &str = r#"
DO $$ BEGIN
    CREATE TYPE message_type AS ENUM ('text', 'audio', 'image', 'video');
EXCEPTION
    WHEN duplicate_object THEN NULL;
END $$;

CREATE TABLE IF NOT EXISTS users (
    id              BIGSERIAL PRIMARY KEY,
    phone_or_email  TEXT NOT NULL UNIQUE,
    name            TEXT NOT NULL,
    relationship    TEXT,
    password_hash   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS family_members (
    id                    BIGSERIAL PRIMARY KEY,
    name                  TEXT NOT NULL,
    relationship          TEXT NOT NULL,
    avatar_url            TEXT,
    bio                   TEXT,
    birth_date            DATE,
    is_registered         BOOLEAN NOT NULL DEFAULT FALSE,
    invite_code           TEXT NOT NULL,
    family_id             BIGINT,
    created_by_member_id  BIGINT REFERENCES family_members(id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS events (
    id                  BIGSERIAL PRIMARY KEY,
    title               TEXT NOT NULL,
    date                DATE NOT NULL,
    "type"              TEXT NOT NULL,
    description         TEXT,
    is_recurring        BOOLEAN NOT NULL DEFAULT TRUE,
    member_id           BIGINT,
    custom_member_name  TEXT
);

CREATE TABLE IF NOT EXISTS messages (
    id                BIGSERIAL PRIMARY KEY,
    family_member_id  BIGINT NOT NULL REFERENCES family_members(id) ON DELETE CASCADE,
    author_name       TEXT NOT NULL,
    author_role       TEXT NOT NULL,
    author_avatar     TEXT,
    content           TEXT NOT NULL,
    "type"            message_type NOT NULL,
    media_url         TEXT,
    duration          INTEGER,
    created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_messages_member_created
    ON messages(family_member_id, created_at DESC);
"#;

pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
