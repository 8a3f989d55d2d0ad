//! Integration tests for Salesboard.
//!
//! # Running Tests
//!
//! The tests are `#[ignore]`d by default because they need live
//! infrastructure:
//!
//! ```bash
//! # Warehouse-only tests (metrics_queries) need the DASHBOARD_DB_*
//! # variables pointing at a scratch database with migrations applied:
//! cargo run -p salesboard-cli -- migrate
//! cargo test -p salesboard-integration-tests --test metrics_queries -- --ignored
//!
//! # Page tests (dashboard_pages) additionally need a running server:
//! cargo run -p salesboard-dashboard &
//! cargo test -p salesboard-integration-tests --test dashboard_pages -- --ignored
//! ```
//!
//! The warehouse tests truncate every table, so never point them at a
//! database whose contents you care about.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use sqlx::PgPool;

use salesboard_core::RetailDataset;
use salesboard_dashboard::config::DatabaseConfig;
use salesboard_dashboard::db;

/// Base URL of the running dashboard (configurable via environment).
#[must_use]
pub fn dashboard_base_url() -> String {
    std::env::var("DASHBOARD_BASE_URL").unwrap_or_else(|_| "http://localhost:8501".to_string())
}

/// HTTP client for page tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the scratch warehouse named by the `DASHBOARD_DB_*`
/// environment variables.
///
/// # Panics
///
/// Panics if configuration is incomplete or the database is unreachable;
/// both mean the test environment is not set up.
pub async fn warehouse_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let config = DatabaseConfig::from_env().expect("DASHBOARD_DB_* configuration incomplete");
    db::create_pool(&config)
        .await
        .expect("Failed to connect to the scratch warehouse")
}

/// Remove every row from the warehouse tables.
///
/// # Panics
///
/// Panics if the truncate fails.
pub async fn clear_warehouse(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE customers, stores, categories, subcategories, products, orders, \
         order_line_items RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .expect("Failed to clear warehouse tables");
}

/// Insert an in-memory dataset into the warehouse, dimensions first so
/// the fact tables' foreign keys resolve.
///
/// # Panics
///
/// Panics if any insert fails.
pub async fn load_dataset(pool: &PgPool, dataset: &RetailDataset) {
    for category in &dataset.categories {
        sqlx::query(
            "INSERT INTO categories (product_category_id, product_category) VALUES ($1, $2)",
        )
        .bind(category.product_category_id)
        .bind(&category.product_category)
        .execute(pool)
        .await
        .expect("Failed to insert category");
    }

    for subcategory in &dataset.subcategories {
        sqlx::query(
            "INSERT INTO subcategories \
             (product_subcategory_id, product_subcategory, product_category_id) \
             VALUES ($1, $2, $3)",
        )
        .bind(subcategory.product_subcategory_id)
        .bind(&subcategory.product_subcategory)
        .bind(subcategory.product_category_id)
        .execute(pool)
        .await
        .expect("Failed to insert subcategory");
    }

    for product in &dataset.products {
        sqlx::query(
            "INSERT INTO products \
             (product_id, product_name, product_brand, product_price, product_cost, \
              product_subcategory_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.product_id)
        .bind(&product.product_name)
        .bind(&product.product_brand)
        .bind(product.product_price)
        .bind(product.product_cost)
        .bind(product.product_subcategory_id)
        .execute(pool)
        .await
        .expect("Failed to insert product");
    }

    for customer in &dataset.customers {
        sqlx::query(
            "INSERT INTO customers (customer_id, customer_name, customer_state) \
             VALUES ($1, $2, $3)",
        )
        .bind(customer.customer_id)
        .bind(&customer.customer_name)
        .bind(&customer.customer_state)
        .execute(pool)
        .await
        .expect("Failed to insert customer");
    }

    for store in &dataset.stores {
        sqlx::query("INSERT INTO stores (store_id, store_name, store_country) VALUES ($1, $2, $3)")
            .bind(store.store_id)
            .bind(&store.store_name)
            .bind(&store.store_country)
            .execute(pool)
            .await
            .expect("Failed to insert store");
    }

    for order in &dataset.orders {
        sqlx::query(
            "INSERT INTO orders (order_number, order_year, customer_id, store_id) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(order.order_number)
        .bind(order.order_year)
        .bind(order.customer_id)
        .bind(order.store_id)
        .execute(pool)
        .await
        .expect("Failed to insert order");
    }

    for line_item in &dataset.line_items {
        sqlx::query(
            "INSERT INTO order_line_items (order_number, product_id, quantity) \
             VALUES ($1, $2, $3)",
        )
        .bind(line_item.order_number)
        .bind(line_item.product_id)
        .bind(line_item.quantity)
        .execute(pool)
        .await
        .expect("Failed to insert line item");
    }
}
