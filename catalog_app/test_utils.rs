#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use serde_json::Value;
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    use catalog_types::{
        PrimaryKey, Resource,
        errors::{ApplicationError, DbError},
    };

    use crate::pool::CatalogPool;

    /// What the mock pool answers to the next statement.
    #[derive(Debug, Clone)]
    pub enum MockReply {
        Rows(Vec<Value>),
        RowCount(u64),
        Reject(String),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct IssuedStatement {
        pub sql: String,
        pub key: Option<PrimaryKey>,
    }

    /// Pool double answering from a queue of replies, one per statement.
    ///
    /// Rows are given as JSON records and decoded into the requested row type.
    /// Clones share the queue and the statement log.
    #[derive(Default, Clone)]
    pub struct MockCatalogPool {
        replies: Arc<Mutex<VecDeque<MockReply>>>,
        statements: Arc<Mutex<Vec<IssuedStatement>>>,
    }

    impl MockCatalogPool {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn resolve_rows(&self, rows: Vec<Value>) {
            self.push(MockReply::Rows(rows));
        }

        pub fn resolve_row_count(&self, row_count: u64) {
            self.push(MockReply::RowCount(row_count));
        }

        pub fn reject(&self, message: &str) {
            self.push(MockReply::Reject(message.to_string()));
        }

        pub fn statements(&self) -> Vec<IssuedStatement> {
            self.statements.lock().unwrap().clone()
        }

        fn push(&self, reply: MockReply) {
            self.replies.lock().unwrap().push_back(reply);
        }

        fn next_reply(&self, sql: &str, key: Option<PrimaryKey>) -> MockReply {
            self.statements.lock().unwrap().push(IssuedStatement {
                sql: sql.to_string(),
                key,
            });

            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("no reply queued for `{sql}`"))
        }
    }

    #[async_trait]
    impl CatalogPool for MockCatalogPool {
        async fn fetch_all<R: Resource>(&self, sql: &str) -> Result<Vec<R>, ApplicationError> {
            match self.next_reply(sql, None) {
                MockReply::Rows(rows) => rows
                    .into_iter()
                    .map(|row| serde_json::from_value(row).map_err(|e| ApplicationError::from(DbError::Json(e))))
                    .collect(),
                MockReply::Reject(message) => Err(ApplicationError::Infrastructure(message)),
                MockReply::RowCount(_) => panic!("row count queued for read statement `{sql}`"),
            }
        }

        async fn execute(&self, sql: &str, key: &PrimaryKey) -> Result<u64, ApplicationError> {
            match self.next_reply(sql, Some(key.clone())) {
                MockReply::RowCount(row_count) => Ok(row_count),
                MockReply::Reject(message) => Err(ApplicationError::Infrastructure(message)),
                MockReply::Rows(_) => panic!("rows queued for write statement `{sql}`"),
            }
        }
    }
}
