use sqlx::postgres::{PgPool, PgPoolOptions};

use catalog_app::config::Config;
use catalog_types::errors::{ApplicationError, DbError};

pub type DbPool = PgPool;

pub async fn establish_connection_pool(config: &Config) -> Result<DbPool, DbError> {
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?)
}

pub async fn establish_test_connection_pool() -> Result<DbPool, ApplicationError> {
    let config = Config::from_database_env("TEST_DATABASE_URL")?;
    Ok(establish_connection_pool(&config).await?)
}
