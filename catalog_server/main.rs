use std::sync::Arc;

use catalog_app::{Catalogs, ListOutcome, config::Config};
use catalog_db::{PostgresCatalogPool, establish_connection_pool};
use catalog_types::{ApplicationError, Result};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();

    let config = Config::from_env()?;
    let pool = Arc::new(PostgresCatalogPool::new(
        establish_connection_pool(&config).await?,
    ));
    tracing::info!(
        max_connections = config.max_connections,
        "Connected to catalog database"
    );

    let catalogs = Catalogs::new(pool.clone());
    report_inventory(&catalogs).await;

    pool.close().await;
    tracing::info!("Catalog database pool closed");

    Ok(())
}

async fn report_inventory(catalogs: &Catalogs<PostgresCatalogPool>) {
    match catalogs.fifa_players.list_player_cards().await {
        ListOutcome::Rows(rows) => tracing::info!(rows = rows.len(), "FIFA players catalog"),
        ListOutcome::Failure(message) => tracing::warn!("FIFA players catalog: {message}"),
    }

    match catalogs.netflix_titles.list_netflix_titles().await {
        ListOutcome::Rows(rows) => tracing::info!(rows = rows.len(), "Netflix titles catalog"),
        ListOutcome::Failure(message) => tracing::warn!("Netflix titles catalog: {message}"),
    }
}
