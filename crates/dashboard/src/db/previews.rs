//! Raw table previews for the sidebar table views.
//!
//! Previews dump up to the first thousand rows of a warehouse table in
//! whatever order the database returns them; the warehouse is loaded in
//! bulk, so no ordering is promised. Cells are formatted as plain
//! strings at this layer so the template only prints.

use sqlx::PgPool;

use salesboard_core::{Category, Customer, Order, OrderLineItem, Product, Store, Subcategory};

use super::RepositoryError;
use crate::components::{DataTable, TableColumn};

const CUSTOMERS: &str = "SELECT * FROM customers LIMIT 1000";
const STORES: &str = "SELECT * FROM stores LIMIT 1000";
const CATEGORIES: &str = "SELECT * FROM categories LIMIT 1000";
const SUBCATEGORIES: &str = "SELECT * FROM subcategories LIMIT 1000";
const PRODUCTS: &str = "SELECT * FROM products LIMIT 1000";
const ORDERS: &str = "SELECT * FROM orders LIMIT 1000";
const ORDER_LINE_ITEMS: &str = "SELECT * FROM order_line_items LIMIT 1000";

/// Read-only access to the raw table previews.
pub struct PreviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PreviewRepository<'a> {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Preview of the `customers` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn customers(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Customer>(CUSTOMERS)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("customer_id", "Customer ID"),
            TableColumn::new("customer_name", "Customer Name"),
            TableColumn::new("customer_state", "Customer State"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.customer_id.to_string(),
                row.customer_name,
                row.customer_state,
            ]);
        }
        Ok(table)
    }

    /// Preview of the `stores` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn stores(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Store>(STORES)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("store_id", "Store ID"),
            TableColumn::new("store_name", "Store Name"),
            TableColumn::new("store_country", "Store Country"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.store_id.to_string(),
                row.store_name,
                row.store_country,
            ]);
        }
        Ok(table)
    }

    /// Preview of the `categories` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn categories(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(CATEGORIES)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("product_category_id", "Product Category ID"),
            TableColumn::new("product_category", "Product Category"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.product_category_id.to_string(),
                row.product_category,
            ]);
        }
        Ok(table)
    }

    /// Preview of the `subcategories` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn subcategories(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Subcategory>(SUBCATEGORIES)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("product_subcategory_id", "Product Subcategory ID"),
            TableColumn::new("product_subcategory", "Product Subcategory"),
            TableColumn::new("product_category_id", "Product Category ID"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.product_subcategory_id.to_string(),
                row.product_subcategory,
                row.product_category_id.to_string(),
            ]);
        }
        Ok(table)
    }

    /// Preview of the `products` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn products(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(PRODUCTS)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("product_id", "Product ID"),
            TableColumn::new("product_name", "Product Name"),
            TableColumn::new("product_brand", "Product Brand"),
            TableColumn::new("product_price", "Product Price"),
            TableColumn::new("product_cost", "Product Cost"),
            TableColumn::new("product_subcategory_id", "Product Subcategory ID"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.product_id.to_string(),
                row.product_name,
                row.product_brand,
                row.product_price.to_string(),
                row.product_cost.to_string(),
                row.product_subcategory_id.to_string(),
            ]);
        }
        Ok(table)
    }

    /// Preview of the `orders` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn orders(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(ORDERS)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("order_number", "Order Number"),
            TableColumn::new("order_year", "Order Year"),
            TableColumn::new("customer_id", "Customer ID"),
            TableColumn::new("store_id", "Store ID"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.order_number.to_string(),
                row.order_year.to_string(),
                row.customer_id.to_string(),
                row.store_id.to_string(),
            ]);
        }
        Ok(table)
    }

    /// Preview of the `order_line_items` table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    pub async fn order_line_items(&self) -> Result<DataTable, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderLineItem>(ORDER_LINE_ITEMS)
            .fetch_all(self.pool)
            .await?;

        let mut table = DataTable::new(vec![
            TableColumn::new("order_number", "Order Number"),
            TableColumn::new("product_id", "Product ID"),
            TableColumn::new("quantity", "Quantity"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.order_number.to_string(),
                row.product_id.to_string(),
                row.quantity.to_string(),
            ]);
        }
        Ok(table)
    }
}
