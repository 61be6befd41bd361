use catalog_types::{PrimaryKey, Resource, errors::ApplicationError};

/// The connection pool as seen by the accessors.
///
/// Implementations own connection management entirely: limits, queuing and
/// timeouts live behind this trait, accessors just await the result.
#[async_trait::async_trait]
pub trait CatalogPool: Send + Sync {
    /// Runs a read statement and decodes every returned row as `R`, in the
    /// order the database produced them.
    async fn fetch_all<R: Resource>(&self, sql: &str) -> Result<Vec<R>, ApplicationError>;

    /// Runs a write statement with `key` bound to `$1` and returns the
    /// number of affected rows.
    async fn execute(&self, sql: &str, key: &PrimaryKey) -> Result<u64, ApplicationError>;
}
