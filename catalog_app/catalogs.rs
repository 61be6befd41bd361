use std::sync::Arc;

use catalog_types::{FifaPlayer, NetflixTitle};

use crate::{
    accessor::{ListOutcome, ResourceAccessor},
    pool::CatalogPool,
};

/// Player cards of the FIFA players catalog.
pub struct FifaPlayers<P> {
    accessor: ResourceAccessor<FifaPlayer, P>,
}

impl<P: CatalogPool> FifaPlayers<P> {
    pub fn new(pool: Arc<P>) -> Self {
        Self {
            accessor: ResourceAccessor::new(pool),
        }
    }

    pub async fn list_player_cards(&self) -> ListOutcome<FifaPlayer> {
        self.accessor.list_all().await
    }

    pub async fn remove_player_card(&self, playerid: i32) -> bool {
        self.accessor.remove_by_id(playerid).await
    }

    pub fn accessor(&self) -> &ResourceAccessor<FifaPlayer, P> {
        &self.accessor
    }
}

/// Movies and shows of the Netflix titles catalog.
pub struct NetflixTitles<P> {
    accessor: ResourceAccessor<NetflixTitle, P>,
}

impl<P: CatalogPool> NetflixTitles<P> {
    pub fn new(pool: Arc<P>) -> Self {
        Self {
            accessor: ResourceAccessor::new(pool),
        }
    }

    pub async fn list_netflix_titles(&self) -> ListOutcome<NetflixTitle> {
        self.accessor.list_all().await
    }

    pub async fn remove_netflix_title(&self, show_id: &str) -> bool {
        self.accessor.remove_by_id(show_id.to_string()).await
    }

    pub fn accessor(&self) -> &ResourceAccessor<NetflixTitle, P> {
        &self.accessor
    }
}

/// Both catalogs over one shared pool. The caller owns the pool's lifecycle.
pub struct Catalogs<P> {
    pub fifa_players: FifaPlayers<P>,
    pub netflix_titles: NetflixTitles<P>,
}

impl<P: CatalogPool> Catalogs<P> {
    pub fn new(pool: Arc<P>) -> Self {
        Self {
            fifa_players: FifaPlayers::new(pool.clone()),
            netflix_titles: NetflixTitles::new(pool),
        }
    }
}
