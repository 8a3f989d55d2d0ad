//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Project overview
//! GET  /dashboard                - Main dashboard (KPIs, charts, summary grid)
//!
//! # Table previews (first 1,000 rows each)
//! GET  /tables/customers         - Customers table
//! GET  /tables/stores            - Stores table
//! GET  /tables/products          - Products table
//! GET  /tables/categories        - Categories table
//! GET  /tables/subcategories     - Subcategories table
//! GET  /tables/orders            - Orders table
//! GET  /tables/order-line-items  - Order line items table
//! ```

pub mod dashboard;
pub mod overview;
pub mod tables;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Project overview
        .route("/", get(overview::overview))
        // Main dashboard
        .route("/dashboard", get(dashboard::dashboard))
        // Raw table previews
        .route("/tables/{slug}", get(tables::table_preview))
}
