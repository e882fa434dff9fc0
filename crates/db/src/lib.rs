//! Storage layer for Pocketbook.
//!
//! This crate provides:
//! - The `LedgerStore` abstraction the API talks to
//! - An in-memory store and a `SeaORM` Postgres store
//! - `SeaORM` entity definitions
//! - Database migrations

pub mod entities;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{BudgetFilter, LedgerStore, StoreError, StoreResult};

use std::sync::Arc;
use std::time::Duration;

use pocketbook_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::migration::Migrator;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Opens the store selected by `database.url`.
///
/// `memory` selects [`MemoryStore`]; anything else is treated as a Postgres
/// URL, optionally migrated to the latest schema.
///
/// # Errors
///
/// Returns an error if connecting or migrating fails.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn LedgerStore>, DbErr> {
    if config.is_memory() {
        info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db = connect(config).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }
    info!("Connected to Postgres store");
    Ok(Arc::new(PgStore::new(db)))
}
