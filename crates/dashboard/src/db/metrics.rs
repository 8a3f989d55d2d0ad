//! Aggregation queries behind the main dashboard.

use rust_decimal::Decimal;
use sqlx::PgPool;

use salesboard_core::{CategoryRevenue, CountryBrandSales, StateProfit, YearlySales};

use super::{RepositoryError, catalog};

/// Read-only access to the warehouse aggregations.
///
/// Borrows the pool, so handlers construct one per request.
pub struct MetricsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MetricsRepository<'a> {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total revenue over all line items.
    ///
    /// `None` when the warehouse has no line items at all.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn total_revenue(&self) -> Result<Option<Decimal>, RepositoryError> {
        let total = sqlx::query_scalar::<_, Option<Decimal>>(catalog::TOTAL_REVENUE)
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    /// Count of distinct order numbers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn total_orders(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(catalog::TOTAL_ORDERS)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Mean revenue of orders that have line items.
    ///
    /// `None` when no order has a line item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn average_order_value(&self) -> Result<Option<Decimal>, RepositoryError> {
        let average = sqlx::query_scalar::<_, Option<Decimal>>(catalog::AVERAGE_ORDER_VALUE)
            .fetch_one(self.pool)
            .await?;
        Ok(average)
    }

    /// Top customer states by total profit, descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn profit_by_state(&self) -> Result<Vec<StateProfit>, RepositoryError> {
        let rows = sqlx::query_as::<_, StateProfit>(catalog::PROFIT_BY_STATE)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Top product categories by revenue, descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn revenue_by_category(&self) -> Result<Vec<CategoryRevenue>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRevenue>(catalog::REVENUE_BY_CATEGORY)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Units sold and average order value per year, ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn yearly_sales(&self) -> Result<Vec<YearlySales>, RepositoryError> {
        let rows = sqlx::query_as::<_, YearlySales>(catalog::YEARLY_SALES)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Country and brand pairs ranked by profit, descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn country_brand_summary(&self) -> Result<Vec<CountryBrandSales>, RepositoryError> {
        let rows = sqlx::query_as::<_, CountryBrandSales>(catalog::COUNTRY_BRAND_SUMMARY)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }
}
