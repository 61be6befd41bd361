use dotenvy::dotenv;
use std::{env, time::Duration};

use catalog_types::errors::{ApplicationError, DbError};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_database_env("DATABASE_URL")
    }

    /// Same as [`Config::from_env`], reading the connection string from
    /// `database_env` instead of `DATABASE_URL`.
    pub fn from_database_env(database_env: &'static str) -> Result<Self, ApplicationError> {
        dotenv().ok();

        let database_url =
            env::var(database_env).map_err(|_| DbError::MissingDatabaseUrl(database_env))?;

        Ok(Self {
            database_url,
            max_connections: parse_max_connections(env::var("CATALOG_DB_MAX_CONNECTIONS").ok()),
            acquire_timeout: parse_acquire_timeout(
                env::var("CATALOG_DB_ACQUIRE_TIMEOUT_SECS").ok(),
            ),
        })
    }
}

fn parse_max_connections(value: Option<String>) -> u32 {
    match value {
        Some(val) => val
            .parse::<u32>()
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
            .clamp(1, 100),
        None => DEFAULT_MAX_CONNECTIONS,
    }
}

fn parse_acquire_timeout(value: Option<String>) -> Duration {
    let secs = match value {
        Some(val) => val.parse::<u64>().unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
    };

    Duration::from_secs(secs)
}
