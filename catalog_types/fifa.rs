use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::Resource;

/// A player card from the FIFA players catalog.
///
/// Ratings are stored as text in the source table; goalkeeper-only
/// attributes (`div`, `pos`, `han`, `reff`, `kic`, `spd`) hold `"NA"` for
/// outfield players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FifaPlayer {
    pub playerid: i32,
    pub playername: Option<String>,
    pub foot: Option<String>,
    pub playerposition: Option<String>,
    pub awr: Option<String>,
    pub dwr: Option<String>,
    pub ovr: Option<String>,
    pub pac: Option<String>,
    pub sho: Option<String>,
    pub pas: Option<String>,
    pub dri: Option<String>,
    pub def: Option<String>,
    pub phy: Option<String>,
    pub sm: Option<String>,
    pub div: Option<String>,
    pub pos: Option<String>,
    pub han: Option<String>,
    pub reff: Option<String>,
    pub kic: Option<String>,
    pub spd: Option<String>,
}

impl Resource for FifaPlayer {
    const TABLE: &'static str = "fifa_players";
    const PRIMARY_KEY: &'static str = "playerid";

    type Id = i32;

    fn id(&self) -> i32 {
        self.playerid
    }
}
