pub mod errors;
pub mod fifa;
pub mod netflix;
pub mod resource;

pub use errors::{ApplicationError, DbError, Result};
pub use fifa::FifaPlayer;
pub use netflix::NetflixTitle;
pub use resource::{PrimaryKey, Resource};
