use serde::{Serialize, de::DeserializeOwned};
use sqlx::{FromRow, postgres::PgRow};
use std::fmt;

/// A primary key value in the form it gets bound to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    Int(i32),
    Text(String),
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Int(id) => write!(f, "{}", id),
            PrimaryKey::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i32> for PrimaryKey {
    fn from(id: i32) -> Self {
        PrimaryKey::Int(id)
    }
}

impl From<String> for PrimaryKey {
    fn from(id: String) -> Self {
        PrimaryKey::Text(id)
    }
}

impl From<&str> for PrimaryKey {
    fn from(id: &str) -> Self {
        PrimaryKey::Text(id.to_string())
    }
}

/// A table exposed through a resource accessor.
///
/// Implementors describe where the rows live (`TABLE`), which column
/// identifies a row (`PRIMARY_KEY`) and the Rust type of that column (`Id`).
/// The row struct itself is the shape decoded from `SELECT *`.
pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    const TABLE: &'static str;
    const PRIMARY_KEY: &'static str;

    type Id: Into<PrimaryKey> + Send;

    fn id(&self) -> Self::Id;

    fn select_all_sql() -> String {
        format!("SELECT * FROM {}", Self::TABLE)
    }

    /// Parameterized on `$1`; the id is never spliced into the statement.
    fn delete_by_id_sql() -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1",
            Self::TABLE,
            Self::PRIMARY_KEY
        )
    }
}
