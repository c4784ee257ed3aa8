//! Database connections
//!
//! Thin helpers over [`sea_orm::Database`] that apply [`DatabaseConfig`] and
//! run the bundled migrations.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use taxi_service_migration::{Migrator, MigratorTrait};

use crate::config::DatabaseConfig;

#[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());

    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;

    if config.run_migrations {
        migrate(&db).await?;
    }

    tracing::info!("Database connected");

    Ok(db)
}

/// Fresh in-memory SQLite database
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");

    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(60 * 60))
        .sqlx_logging(false);

    Database::connect(options).await
}

pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
