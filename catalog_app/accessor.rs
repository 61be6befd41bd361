use serde::Serialize;
use std::{marker::PhantomData, sync::Arc};
use tracing::{debug, error, instrument};

use catalog_types::{PrimaryKey, Resource, errors::ApplicationError};

use crate::pool::CatalogPool;

/// Returned by [`ResourceAccessor::list_all`] in place of the rows when the
/// query fails. The failure itself is only in the logs.
pub const LIST_FAILURE_MESSAGE: &str = "error, verifique os logs do servidor";

/// Outcome of listing a table.
///
/// An empty table is `Rows(vec![])`, never `Failure`. Serializes untagged:
/// either the array of rows or the bare failure string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListOutcome<R> {
    Rows(Vec<R>),
    Failure(&'static str),
}

impl<R> ListOutcome<R> {
    pub fn failure() -> Self {
        ListOutcome::Failure(LIST_FAILURE_MESSAGE)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ListOutcome::Failure(_))
    }

    pub fn rows(&self) -> Option<&[R]> {
        match self {
            ListOutcome::Rows(rows) => Some(rows),
            ListOutcome::Failure(_) => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<R>> {
        match self {
            ListOutcome::Rows(rows) => Some(rows),
            ListOutcome::Failure(_) => None,
        }
    }
}

/// Outcome of a delete that reached the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

impl Removal {
    pub fn from_rows_affected(rows_affected: u64) -> Self {
        if rows_affected >= 1 {
            Removal::Removed
        } else {
            Removal::NotFound
        }
    }

    pub fn is_removed(self) -> bool {
        self == Removal::Removed
    }
}

/// Lists and deletes rows of the table described by `R`.
///
/// Stateless apart from the shared pool handle: every call issues exactly one
/// statement.
pub struct ResourceAccessor<R, P> {
    pool: Arc<P>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, P> Clone for ResourceAccessor<R, P> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, P: CatalogPool> ResourceAccessor<R, P> {
    pub fn new(pool: Arc<P>) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    /// Every row of the table, errors included.
    #[instrument(skip_all, fields(table = R::TABLE))]
    pub async fn fetch_all(&self) -> Result<Vec<R>, ApplicationError> {
        let sql = R::select_all_sql();
        debug!(%sql, "Listing rows");

        self.pool.fetch_all(&sql).await
    }

    /// Every row of the table, or [`ListOutcome::Failure`] if the query fails.
    pub async fn list_all(&self) -> ListOutcome<R> {
        match self.fetch_all().await {
            Ok(rows) => ListOutcome::Rows(rows),
            Err(e) => {
                error!(table = R::TABLE, "Failed to list rows: {e}");
                ListOutcome::failure()
            }
        }
    }

    /// Deletes the row whose primary key equals `id`, telling a missing row
    /// apart from a failed query.
    pub async fn delete_by_id(&self, id: R::Id) -> Result<Removal, ApplicationError> {
        let key: PrimaryKey = id.into();
        self.delete_by_key(&key).await
    }

    /// Deletes the row whose primary key equals `id`.
    ///
    /// `false` covers both "no such row" and "query failed"; use
    /// [`ResourceAccessor::delete_by_id`] to tell them apart.
    pub async fn remove_by_id(&self, id: R::Id) -> bool {
        let key: PrimaryKey = id.into();

        match self.delete_by_key(&key).await {
            Ok(removal) => removal.is_removed(),
            Err(e) => {
                error!(table = R::TABLE, id = %key, "Failed to remove row: {e}");
                false
            }
        }
    }

    #[instrument(skip_all, fields(table = R::TABLE, primary_key = R::PRIMARY_KEY, id = %key))]
    async fn delete_by_key(&self, key: &PrimaryKey) -> Result<Removal, ApplicationError> {
        let sql = R::delete_by_id_sql();
        debug!(%sql, "Removing row");

        let rows_affected = self.pool.execute(&sql, key).await?;
        Ok(Removal::from_rows_affected(rows_affected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::{FifaPlayer, NetflixTitle};
    use serde_json::json;

    use crate::test_utils::tests::{IssuedStatement, MockCatalogPool};

    fn players(pool: &MockCatalogPool) -> ResourceAccessor<FifaPlayer, MockCatalogPool> {
        ResourceAccessor::new(Arc::new(pool.clone()))
    }

    #[tokio::test]
    async fn test_list_all_issues_select_star() {
        let pool = MockCatalogPool::new();
        pool.resolve_rows(vec![]);

        let outcome = players(&pool).list_all().await;

        assert_eq!(outcome, ListOutcome::Rows(vec![]));
        assert!(!outcome.is_failure());
        assert_eq!(
            pool.statements(),
            vec![IssuedStatement {
                sql: "SELECT * FROM fifa_players".to_string(),
                key: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_list_all_keeps_database_order() {
        let pool = MockCatalogPool::new();
        pool.resolve_rows(vec![
            json!({ "show_id": "s2", "titulo": "Blood & Water" }),
            json!({ "show_id": "s1", "titulo": "Dick Johnson Is Dead" }),
        ]);
        let titles: ResourceAccessor<NetflixTitle, _> = ResourceAccessor::new(Arc::new(pool));

        let rows = titles.list_all().await.into_rows().unwrap();

        let ids: Vec<_> = rows.iter().map(|row| row.id()).collect();
        assert_eq!(ids, vec!["s2".to_string(), "s1".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_all_propagates_error() {
        let pool = MockCatalogPool::new();
        pool.reject("connection refused");

        let result = players(&pool).fetch_all().await;

        assert!(matches!(result, Err(ApplicationError::Infrastructure(msg)) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn test_remove_by_id_binds_key_as_parameter() {
        let pool = MockCatalogPool::new();
        pool.resolve_row_count(1);

        assert!(players(&pool).remove_by_id(7).await);
        assert_eq!(
            pool.statements(),
            vec![IssuedStatement {
                sql: "DELETE FROM fifa_players WHERE playerid = $1".to_string(),
                key: Some(PrimaryKey::Int(7)),
            }]
        );
    }

    #[tokio::test]
    async fn test_remove_by_id_keeps_hostile_input_out_of_sql() {
        let pool = MockCatalogPool::new();
        pool.resolve_row_count(0);
        let titles: ResourceAccessor<NetflixTitle, _> =
            ResourceAccessor::new(Arc::new(pool.clone()));

        let hostile = "s1'; DROP TABLE netflix_titles; --".to_string();
        assert!(!titles.remove_by_id(hostile.clone()).await);

        let issued = pool.statements();
        assert_eq!(issued[0].sql, "DELETE FROM netflix_titles WHERE show_id = $1");
        assert_eq!(issued[0].key, Some(PrimaryKey::Text(hostile)));
    }

    #[tokio::test]
    async fn test_remove_by_id_counts_multiple_rows_as_removed() {
        let pool = MockCatalogPool::new();
        pool.resolve_row_count(2);

        assert!(players(&pool).remove_by_id(1).await);
    }

    #[tokio::test]
    async fn test_delete_by_id_distinguishes_not_found_from_error() {
        let pool = MockCatalogPool::new();
        pool.resolve_row_count(0);
        pool.reject("deadlock detected");
        pool.resolve_row_count(1);
        let accessor = players(&pool);

        assert_eq!(accessor.delete_by_id(999).await.unwrap(), Removal::NotFound);
        assert!(accessor.delete_by_id(1).await.is_err());
        assert_eq!(accessor.delete_by_id(1).await.unwrap(), Removal::Removed);
    }

    #[test]
    fn test_list_outcome_serializes_untagged() {
        let failure: ListOutcome<FifaPlayer> = ListOutcome::failure();
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!("error, verifique os logs do servidor")
        );

        let empty: ListOutcome<FifaPlayer> = ListOutcome::Rows(vec![]);
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!([]));
        assert_eq!(empty.rows(), Some(&[][..]));
        assert_eq!(failure.rows(), None);
    }
}
