//! Star-schema row types for the retail warehouse.
//!
//! One struct per warehouse table, with fields named after the table
//! columns so `SELECT *` queries map straight onto them. The warehouse
//! is loaded by an external ETL process and read-only from this
//! workspace, so these types carry no mutation helpers.
//!
//! # Derived values
//!
//! Revenue (`quantity * product_price`) and profit
//! (`quantity * (product_price - product_cost)`) are never stored.
//! They are computed at query time, either in SQL or by
//! [`crate::dataset::RetailDataset`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, CustomerId, OrderNumber, ProductId, StoreId, SubcategoryId};

/// A customer dimension row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: CustomerId,
    pub customer_name: String,
    /// Two-letter state or region code, e.g. `"CA"`.
    pub customer_state: String,
}

/// A store dimension row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Store {
    pub store_id: StoreId,
    pub store_name: String,
    pub store_country: String,
}

/// A top-level product category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub product_category_id: CategoryId,
    pub product_category: String,
}

/// A product subcategory row, linking products to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Subcategory {
    pub product_subcategory_id: SubcategoryId,
    pub product_subcategory: String,
    pub product_category_id: CategoryId,
}

/// A product dimension row with unit price and unit cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_brand: String,
    /// Unit sale price in dollars.
    pub product_price: Decimal,
    /// Unit acquisition cost in dollars.
    pub product_cost: Decimal,
    pub product_subcategory_id: SubcategoryId,
}

/// An order header row.
///
/// An order may have zero line items; such orders still count toward
/// the distinct-order total but contribute nothing to revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    pub order_number: OrderNumber,
    pub order_year: i32,
    pub customer_id: CustomerId,
    pub store_id: StoreId,
}

/// An order line item, the fact table of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderLineItem {
    pub order_number: OrderNumber,
    pub product_id: ProductId,
    pub quantity: i32,
}
