pub mod accessor;
pub mod catalogs;
pub mod config;
pub mod pool;
pub mod test_utils;

pub use accessor::{LIST_FAILURE_MESSAGE, ListOutcome, Removal, ResourceAccessor};
pub use catalogs::{Catalogs, FifaPlayers, NetflixTitles};
pub use pool::CatalogPool;
