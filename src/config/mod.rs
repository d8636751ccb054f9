use std::env;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_key: Option<String>,
    pub database_max_connections: u32,
    pub database_init_schema: bool,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .map(|v| parse_or(&v, "SERVER_PORT", 3000))
            .unwrap_or(3000);

        Ok(Config {
            database_url,
            database_key: lookup("DATABASE_KEY").filter(|v| !v.is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .map(|v| parse_or(&v, "DATABASE_MAX_CONNECTIONS", 10))
                .unwrap_or(10),
            database_init_schema: lookup("DATABASE_INIT_SCHEMA")
                .map(|v| parse_or(&v, "DATABASE_INIT_SCHEMA", false))
                .unwrap_or(false),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            api_base_uri: normalize_base_uri(
                &lookup("API_BASE_URI").unwrap_or_else(|| "/api".into()),
            ),
        })
    }

    /// Connection options for the hosted database, with the access key applied
    /// as the password when one is configured.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(&self.database_url)?
            .application_name("family_memories_backend");
        Ok(match &self.database_key {
            Some(key) => options.password(key),
            None => options,
        })
    }
}

fn parse_or<T: FromStr>(raw: &str, key: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid value {:?} for {}, using default", raw, key);
        default
    })
}

// "" and "/" both mean "no prefix"; anything else gets one leading slash and no trailing one.
fn normalize_base_uri(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
