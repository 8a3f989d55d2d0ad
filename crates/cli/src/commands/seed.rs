//! Seed the warehouse with the built-in demo dataset.
//!
//! Replaces the contents of all seven warehouse tables. Intended for
//! local development; the production warehouse is loaded by an
//! external ETL process.

use tracing::info;

use salesboard_core::RetailDataset;
use salesboard_dashboard::config::{ConfigError, DatabaseConfig};
use salesboard_dashboard::{db, filters};

/// Errors from the seed command.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Replace the warehouse contents with the demo dataset.
///
/// # Errors
///
/// Returns `SeedError` if configuration is incomplete or any statement
/// fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let config = DatabaseConfig::from_env()?;
    let pool = db::create_pool(&config).await?;
    let dataset = RetailDataset::demo();

    info!("Clearing existing warehouse rows...");
    sqlx::query(
        "TRUNCATE customers, stores, categories, subcategories, products, orders, \
         order_line_items RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    // Dimensions first so the fact tables' foreign keys resolve
    for category in &dataset.categories {
        sqlx::query(
            "INSERT INTO categories (product_category_id, product_category) VALUES ($1, $2)",
        )
        .bind(category.product_category_id)
        .bind(&category.product_category)
        .execute(&pool)
        .await?;
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
        .execute(&pool)
        .await?;
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
        .execute(&pool)
        .await?;
    }

    for customer in &dataset.customers {
        sqlx::query(
            "INSERT INTO customers (customer_id, customer_name, customer_state) \
             VALUES ($1, $2, $3)",
        )
        .bind(customer.customer_id)
        .bind(&customer.customer_name)
        .bind(&customer.customer_state)
        .execute(&pool)
        .await?;
    }

    for store in &dataset.stores {
        sqlx::query("INSERT INTO stores (store_id, store_name, store_country) VALUES ($1, $2, $3)")
            .bind(store.store_id)
            .bind(&store.store_name)
            .bind(&store.store_country)
            .execute(&pool)
            .await?;
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
        .execute(&pool)
        .await?;
    }

    for line_item in &dataset.line_items {
        sqlx::query(
            "INSERT INTO order_line_items (order_number, product_id, quantity) \
             VALUES ($1, $2, $3)",
        )
        .bind(line_item.order_number)
        .bind(line_item.product_id)
        .bind(line_item.quantity)
        .execute(&pool)
        .await?;
    }

    info!(
        customers = dataset.customers.len(),
        stores = dataset.stores.len(),
        categories = dataset.categories.len(),
        subcategories = dataset.subcategories.len(),
        products = dataset.products.len(),
        orders = dataset.orders.len(),
        line_items = dataset.line_items.len(),
        "Demo dataset loaded"
    );

    // Headline figures the dashboard should now show, computed from the
    // in-memory reference so a warehouse load can be eyeballed
    match dataset.total_revenue() {
        Some(revenue) => info!("Expected total revenue: {}", filters::format_usd(revenue)),
        None => info!("Expected total revenue: no sales data"),
    }
    info!(
        "Expected total orders: {}",
        filters::format_count(dataset.total_orders())
    );
    match dataset.average_order_value() {
        Some(aov) => info!("Expected average order value: {}", filters::format_usd(aov)),
        None => info!("Expected average order value: no order revenue"),
    }

    Ok(())
}
