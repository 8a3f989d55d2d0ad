//! Print the dashboard metric catalog to the terminal.
//!
//! Runs the same queries as the main dashboard page and logs one line
//! per metric. Useful for checking a warehouse load without starting
//! the server.

use tracing::info;

use salesboard_dashboard::config::{ConfigError, DatabaseConfig};
use salesboard_dashboard::db::{self, MetricsRepository, RepositoryError};
use salesboard_dashboard::filters;

/// Errors from the report command.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query error: {0}")]
    Query(#[from] RepositoryError),
}

/// Run the metric catalog and log the results.
///
/// # Errors
///
/// Returns `ReportError` if configuration is incomplete or any query
/// fails.
pub async fn run() -> Result<(), ReportError> {
    dotenvy::dotenv().ok();

    let config = DatabaseConfig::from_env()?;
    let pool = db::create_pool(&config).await?;
    let repo = MetricsRepository::new(&pool);

    match repo.total_revenue().await? {
        Some(revenue) => info!("Total revenue: {}", filters::format_usd(revenue)),
        None => info!("Total revenue: no sales data"),
    }

    info!(
        "Total orders: {}",
        filters::format_count(repo.total_orders().await?)
    );

    match repo.average_order_value().await? {
        Some(aov) => info!("Average order value: {}", filters::format_usd(aov)),
        None => info!("Average order value: no order revenue"),
    }

    let states = repo.profit_by_state().await?;
    info!("Top states by profit:");
    for row in &states {
        info!(
            "  {}: {}",
            row.customer_state,
            filters::format_usd(row.total_profit)
        );
    }

    let categories = repo.revenue_by_category().await?;
    info!("Top categories by revenue:");
    for row in &categories {
        info!(
            "  {}: {}",
            row.product_category,
            filters::format_usd(row.revenue)
        );
    }

    let yearly = repo.yearly_sales().await?;
    info!("Yearly sales:");
    for row in &yearly {
        info!(
            "  {}: {} units, {} avg order value",
            row.order_year,
            filters::format_count(row.total_units_sold),
            filters::format_usd(row.avg_order_value)
        );
    }

    let summary = repo.country_brand_summary().await?;
    info!("Country and brand summary rows: {}", summary.len());

    Ok(())
}
