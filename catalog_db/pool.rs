use sqlx::PgPool;
use tracing::debug;

use catalog_app::CatalogPool;
use catalog_types::{
    PrimaryKey, Resource,
    errors::{ApplicationError, DbError},
};

/// Implements CatalogPool on top of a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PostgresCatalogPool {
    pool: PgPool,
}

impl PostgresCatalogPool {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Waits for checked-out connections to be returned, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl CatalogPool for PostgresCatalogPool {
    async fn fetch_all<R: Resource>(&self, sql: &str) -> Result<Vec<R>, ApplicationError> {
        let rows = sqlx::query_as::<_, R>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        debug!(rows = rows.len(), "Fetched rows");
        Ok(rows)
    }

    async fn execute(&self, sql: &str, key: &PrimaryKey) -> Result<u64, ApplicationError> {
        let query = sqlx::query(sql);
        let query = match key {
            PrimaryKey::Int(id) => query.bind(*id),
            PrimaryKey::Text(id) => query.bind(id.as_str()),
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected())
    }
}
