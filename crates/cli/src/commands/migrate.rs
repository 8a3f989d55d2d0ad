//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! sb-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! Reads the same `DASHBOARD_DB_*` variables as the dashboard binary.
//!
//! # Migration Files
//!
//! Warehouse migrations: `crates/dashboard/migrations/`

use sqlx::migrate::MigrateError;

use salesboard_dashboard::config::{ConfigError, DatabaseConfig};
use salesboard_dashboard::db;

/// Errors from the migrate command.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrateError),
}

/// Run warehouse database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if configuration is incomplete, the
/// database is unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let config = DatabaseConfig::from_env()?;

    tracing::info!("Connecting to warehouse database...");
    let pool = db::create_pool(&config).await?;

    tracing::info!("Running warehouse migrations...");
    sqlx::migrate!("../dashboard/migrations").run(&pool).await?;

    tracing::info!("Warehouse migrations complete!");
    Ok(())
}
