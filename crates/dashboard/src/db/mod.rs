//! Database access for the retail warehouse.
//!
//! # Warehouse schema
//!
//! The warehouse is a star schema loaded by an external ETL process and
//! read-only from this service:
//!
//! - `customers` - customer dimension with state
//! - `stores` - store dimension with country
//! - `categories` / `subcategories` - two-level product hierarchy
//! - `products` - product dimension with unit price and unit cost
//! - `orders` - order headers with year, customer, and store
//! - `order_line_items` - fact table of quantities per product per order
//!
//! Revenue and profit are never stored; every query derives them from
//! `quantity`, `product_price`, and `product_cost`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/dashboard/migrations/` and run via:
//! ```bash
//! cargo run -p salesboard-cli -- migrate
//! ```

pub mod catalog;
pub mod metrics;
pub mod previews;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use thiserror::Error;

pub use metrics::MetricsRepository;
pub use previews::PreviewRepository;

use crate::config::DatabaseConfig;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Trusted connections authenticate as the operating-system user; otherwise
/// the explicit credentials from the configuration are used. Certificate
/// trust maps to the SSL mode: trusting the server certificate relaxes
/// verification, the default verifies the full chain.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let ssl_mode = if config.trust_server_certificate {
        PgSslMode::Prefer
    } else {
        PgSslMode::VerifyFull
    };

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .ssl_mode(ssl_mode);

    if let Some(credentials) = &config.credentials {
        options = options
            .username(&credentials.user)
            .password(credentials.password.expose_secret());
    }

    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
