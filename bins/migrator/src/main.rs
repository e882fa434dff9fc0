//! Database migration runner for the Pocketbook Postgres store.
//!
//! Reads the connection string from `DATABASE_URL` (a `.env` file is honored).
//! The server migrates on startup unless `database.run_migrations` is off;
//! this binary is for running or rolling back by hand.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop the ledger tables and re-run migrations

use pocketbook_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The migrator CLI sets up its own tracing.
    cli::run_cli(Migrator).await;
}
