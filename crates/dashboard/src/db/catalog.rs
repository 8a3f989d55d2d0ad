//! The fixed catalog of warehouse aggregation queries.
//!
//! Every metric the dashboard shows comes from one of these statements.
//! The set is closed: handlers pick from the catalog and never build SQL
//! from request input.
//!
//! Two shapes matter enough to call out:
//!
//! - The revenue total joins line items to products only, so a line item
//!   whose order header is missing still counts toward revenue.
//! - Average order value averages per-order subtotals. Orders without
//!   line items never produce a subtotal, so the average is taken over
//!   orders that sold something rather than revenue divided by the
//!   order count.

/// Total revenue across all line items.
pub const TOTAL_REVENUE: &str = "\
SELECT SUM(oli.quantity * p.product_price) AS total_revenue
FROM order_line_items oli
JOIN products p ON oli.product_id = p.product_id";

/// Count of distinct order numbers, including orders without line items.
pub const TOTAL_ORDERS: &str = "\
SELECT COUNT(DISTINCT order_number) AS total_orders
FROM orders";

/// Mean of per-order revenue subtotals.
pub const AVERAGE_ORDER_VALUE: &str = "\
SELECT AVG(order_revenue) AS avg_order_value
FROM (
    SELECT o.order_number, SUM(oli.quantity * p.product_price) AS order_revenue
    FROM orders o
    JOIN order_line_items oli ON o.order_number = oli.order_number
    JOIN products p ON oli.product_id = p.product_id
    GROUP BY o.order_number
) per_order";

/// Top customer states by total profit.
pub const PROFIT_BY_STATE: &str = "\
SELECT c.customer_state, SUM(oli.quantity * (p.product_price - p.product_cost)) AS total_profit
FROM customers c
JOIN orders o ON c.customer_id = o.customer_id
JOIN order_line_items oli ON o.order_number = oli.order_number
JOIN products p ON oli.product_id = p.product_id
GROUP BY c.customer_state
ORDER BY total_profit DESC, c.customer_state
LIMIT 6";

/// Top product categories by revenue.
pub const REVENUE_BY_CATEGORY: &str = "\
SELECT c.product_category, SUM(oli.quantity * p.product_price) AS revenue
FROM order_line_items oli
JOIN products p ON oli.product_id = p.product_id
JOIN subcategories sc ON p.product_subcategory_id = sc.product_subcategory_id
JOIN categories c ON sc.product_category_id = c.product_category_id
GROUP BY c.product_category
ORDER BY revenue DESC, c.product_category
LIMIT 5";

/// Units sold and average order value per year.
///
/// The inner query mirrors the average-order-value subtotal per
/// `(year, order)`, the outer one sums units and averages the subtotals
/// within each year. `SUM` over the bigint subtotals widens to numeric,
/// hence the cast back.
pub const YEARLY_SALES: &str = "\
WITH yearly_order_revenue AS (
    SELECT o.order_year,
           o.order_number,
           SUM(oli.quantity * p.product_price) AS order_revenue,
           SUM(oli.quantity) AS units_sold
    FROM orders o
    JOIN order_line_items oli ON o.order_number = oli.order_number
    JOIN products p ON oli.product_id = p.product_id
    GROUP BY o.order_year, o.order_number
)
SELECT order_year,
       SUM(units_sold)::BIGINT AS total_units_sold,
       AVG(order_revenue) AS avg_order_value
FROM yearly_order_revenue
GROUP BY order_year
ORDER BY order_year";

/// Country and brand pairs ranked by profit.
pub const COUNTRY_BRAND_SUMMARY: &str = "\
SELECT s.store_country,
       p.product_brand,
       SUM(oli.quantity) AS units_sold,
       SUM(oli.quantity * p.product_price) AS revenue,
       SUM(oli.quantity * (p.product_price - p.product_cost)) AS profit
FROM orders o
JOIN stores s ON o.store_id = s.store_id
JOIN order_line_items oli ON o.order_number = oli.order_number
JOIN products p ON oli.product_id = p.product_id
GROUP BY s.store_country, p.product_brand
ORDER BY profit DESC, s.store_country, p.product_brand
LIMIT 1000";

#[cfg(test)]
mod tests {
    use salesboard_core::{CATEGORY_ROWS, STATE_ROWS, SUMMARY_ROWS};

    use super::*;

    #[test]
    fn test_leaderboard_limits_match_reference_row_caps() {
        assert!(PROFIT_BY_STATE.contains(&format!("LIMIT {STATE_ROWS}")));
        assert!(REVENUE_BY_CATEGORY.contains(&format!("LIMIT {CATEGORY_ROWS}")));
        assert!(COUNTRY_BRAND_SUMMARY.contains(&format!("LIMIT {SUMMARY_ROWS}")));
    }

    #[test]
    fn test_total_revenue_does_not_join_orders() {
        // Line items sell even when their order header is missing.
        assert!(!TOTAL_REVENUE.contains("JOIN orders"));
        assert!(TOTAL_REVENUE.contains("JOIN products"));
    }

    #[test]
    fn test_average_order_value_averages_per_order_subtotals() {
        assert!(AVERAGE_ORDER_VALUE.contains("GROUP BY o.order_number"));
        assert!(AVERAGE_ORDER_VALUE.contains("AVG(order_revenue)"));
    }

    #[test]
    fn test_yearly_sales_orders_ascending_by_year() {
        assert!(YEARLY_SALES.trim_end().ends_with("ORDER BY order_year"));
    }

    #[test]
    fn test_leaderboards_break_ties_deterministically() {
        assert!(PROFIT_BY_STATE.contains("ORDER BY total_profit DESC, c.customer_state"));
        assert!(REVENUE_BY_CATEGORY.contains("ORDER BY revenue DESC, c.product_category"));
        assert!(COUNTRY_BRAND_SUMMARY.contains("ORDER BY profit DESC, s.store_country"));
    }
}
