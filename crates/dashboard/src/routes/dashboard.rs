//! Main dashboard route handler.
//!
//! Every request re-runs the full metric catalog; nothing is cached
//! between renders.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use salesboard_core::CountryBrandSales;

use crate::charts::{BarChart, DonutChart, LineChart};
use crate::db::MetricsRepository;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// A KPI card.
#[derive(Debug, Clone)]
pub struct KpiView {
    pub value: String,
    /// Shown instead of a figure when the metric has no data.
    pub note: Option<&'static str>,
}

impl KpiView {
    fn available(value: String) -> Self {
        Self { value, note: None }
    }

    fn unavailable(note: &'static str) -> Self {
        Self {
            value: "\u{2014}".to_string(),
            note: Some(note),
        }
    }
}

/// One row of the country and brand summary grid.
#[derive(Debug, Clone)]
pub struct SummaryRowView {
    pub country: String,
    pub brand: String,
    pub units: String,
    pub revenue: String,
    pub profit: String,
}

impl From<&CountryBrandSales> for SummaryRowView {
    fn from(row: &CountryBrandSales) -> Self {
        Self {
            country: row.store_country.clone(),
            brand: row.product_brand.clone(),
            units: filters::format_count(row.units_sold),
            revenue: filters::format_usd(row.revenue),
            profit: filters::format_usd(row.profit),
        }
    }
}

/// Main dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub revenue_kpi: KpiView,
    pub orders_kpi: KpiView,
    pub aov_kpi: KpiView,
    pub state_profit: BarChart,
    pub category_revenue: DonutChart,
    pub yearly: LineChart,
    pub summary_rows: Vec<SummaryRowView>,
}

/// Display the main dashboard.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<DashboardTemplate, AppError> {
    let repo = MetricsRepository::new(state.pool());

    // Run the whole catalog concurrently; one failed query fails the page
    let (total_revenue, total_orders, average_order_value, state_profit, category_revenue, yearly, summary) = tokio::join!(
        repo.total_revenue(),
        repo.total_orders(),
        repo.average_order_value(),
        repo.profit_by_state(),
        repo.revenue_by_category(),
        repo.yearly_sales(),
        repo.country_brand_summary(),
    );

    let total_revenue = total_revenue.map_err(|e| AppError::query("total revenue", e))?;
    let total_orders = total_orders.map_err(|e| AppError::query("total orders", e))?;
    let average_order_value =
        average_order_value.map_err(|e| AppError::query("average order value", e))?;
    let state_profit = state_profit.map_err(|e| AppError::query("profit by state", e))?;
    let category_revenue =
        category_revenue.map_err(|e| AppError::query("revenue by category", e))?;
    let yearly = yearly.map_err(|e| AppError::query("yearly sales", e))?;
    let summary = summary.map_err(|e| AppError::query("country and brand summary", e))?;

    let revenue_kpi = total_revenue.map_or_else(
        || KpiView::unavailable("No sales data available"),
        |value| KpiView::available(filters::format_usd_millions(value)),
    );
    let orders_kpi = KpiView::available(filters::format_count(total_orders));
    let aov_kpi = average_order_value.map_or_else(
        || KpiView::unavailable("No order revenue available"),
        |value| KpiView::available(filters::format_usd(value)),
    );

    Ok(DashboardTemplate {
        current_path: "/dashboard".to_string(),
        revenue_kpi,
        orders_kpi,
        aov_kpi,
        state_profit: BarChart::new(
            state_profit
                .into_iter()
                .map(|row| (row.customer_state, row.total_profit))
                .collect(),
        ),
        category_revenue: DonutChart::new(
            category_revenue
                .into_iter()
                .map(|row| (row.product_category, row.revenue))
                .collect(),
        ),
        yearly: LineChart::from_yearly(&yearly),
        summary_rows: summary.iter().map(SummaryRowView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_summary_row_view_formats_metrics() {
        let row = CountryBrandSales {
            store_country: "Germany".to_string(),
            product_brand: "Voltaic".to_string(),
            units_sold: 12_500,
            revenue: Decimal::new(1_234_567, 2),
            profit: Decimal::new(-45_000, 2),
        };
        let view = SummaryRowView::from(&row);

        assert_eq!(view.units, "12,500");
        assert_eq!(view.revenue, "$12,345.67");
        assert_eq!(view.profit, "-$450.00");
    }

    #[test]
    fn test_kpi_view_renders_missing_data_as_a_dash() {
        let kpi = KpiView::unavailable("No sales data available");
        assert_eq!(kpi.value, "\u{2014}");
        assert_eq!(kpi.note, Some("No sales data available"));
    }
}
