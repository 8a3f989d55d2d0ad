//! In-memory retail dataset with reference metric computations.
//!
//! [`RetailDataset`] holds rows for every star-schema table and computes
//! the same aggregations the dashboard runs in SQL, using the same join
//! semantics: a row only contributes to a metric when every table the
//! corresponding query joins has a matching row. The CLI seeds demo
//! environments from [`RetailDataset::demo`], and the integration tests
//! compare these computations against the live queries.
//!
//! All grouping uses `BTreeMap`, so output order is deterministic:
//! leaderboards sort by their metric descending with ties in key order,
//! and yearly rows come back in ascending year order.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Customer, Order, OrderLineItem, Product, Store, Subcategory};
use crate::types::{OrderNumber, ProductId};

/// Number of states shown on the profit-by-state leaderboard.
pub const STATE_ROWS: usize = 6;

/// Number of categories shown on the revenue-by-category breakdown.
pub const CATEGORY_ROWS: usize = 5;

/// Row cap for the country and brand summary table.
pub const SUMMARY_ROWS: usize = 1000;

/// Row cap for raw table previews.
pub const PREVIEW_ROWS: usize = 1000;

// ============================================================================
// Aggregate rows
// ============================================================================

/// Profit accumulated for one customer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct StateProfit {
    pub customer_state: String,
    pub total_profit: Decimal,
}

/// Revenue accumulated for one product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CategoryRevenue {
    pub product_category: String,
    pub revenue: Decimal,
}

/// Units sold and average order value for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct YearlySales {
    pub order_year: i32,
    pub total_units_sold: i64,
    pub avg_order_value: Decimal,
}

/// Sales metrics for one store country and product brand pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CountryBrandSales {
    pub store_country: String,
    pub product_brand: String,
    pub units_sold: i64,
    pub revenue: Decimal,
    pub profit: Decimal,
}

// ============================================================================
// Dataset
// ============================================================================

/// A complete in-memory copy of the retail star schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailDataset {
    pub customers: Vec<Customer>,
    pub stores: Vec<Store>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub line_items: Vec<OrderLineItem>,
}

impl RetailDataset {
    /// Total revenue over all line items, `quantity * product_price`.
    ///
    /// Joins line items to products only. Line items whose product is
    /// missing contribute nothing, and `None` means there were no
    /// matching line items at all.
    #[must_use]
    pub fn total_revenue(&self) -> Option<Decimal> {
        let products = self.products_by_id();
        let mut total = None;
        for item in &self.line_items {
            if let Some(product) = products.get(&item.product_id) {
                let line = Decimal::from(item.quantity) * product.product_price;
                *total.get_or_insert(Decimal::ZERO) += line;
            }
        }
        total
    }

    /// Count of distinct order numbers in the orders table.
    ///
    /// Orders without line items still count.
    #[must_use]
    pub fn total_orders(&self) -> i64 {
        let distinct: BTreeSet<OrderNumber> =
            self.orders.iter().map(|order| order.order_number).collect();
        as_count(distinct.len())
    }

    /// Revenue subtotal per order, ascending by order number.
    ///
    /// An order appears here only when it exists in the orders table and
    /// has at least one line item with a matching product. Orders with
    /// no line items are absent, which is what makes
    /// [`average_order_value`](Self::average_order_value) differ from
    /// [`revenue_per_order`](Self::revenue_per_order).
    #[must_use]
    pub fn order_revenue_subtotals(&self) -> Vec<Decimal> {
        let order_numbers: BTreeSet<OrderNumber> =
            self.orders.iter().map(|order| order.order_number).collect();
        let products = self.products_by_id();

        let mut subtotals: BTreeMap<OrderNumber, Decimal> = BTreeMap::new();
        for item in &self.line_items {
            if !order_numbers.contains(&item.order_number) {
                continue;
            }
            if let Some(product) = products.get(&item.product_id) {
                let line = Decimal::from(item.quantity) * product.product_price;
                *subtotals.entry(item.order_number).or_default() += line;
            }
        }
        subtotals.into_values().collect()
    }

    /// Mean of the per-order revenue subtotals.
    ///
    /// This is the average computed over orders that actually sold
    /// something, not total revenue divided by total orders.
    #[must_use]
    pub fn average_order_value(&self) -> Option<Decimal> {
        let subtotals = self.order_revenue_subtotals();
        if subtotals.is_empty() {
            return None;
        }
        let count = Decimal::from(as_count(subtotals.len()));
        Some(subtotals.iter().sum::<Decimal>() / count)
    }

    /// Total revenue divided by the total distinct order count.
    ///
    /// Agrees with [`average_order_value`](Self::average_order_value)
    /// exactly when every order has at least one line item. The
    /// dashboard reports `average_order_value`; this ratio exists so
    /// tests can pin down the difference.
    #[must_use]
    pub fn revenue_per_order(&self) -> Option<Decimal> {
        let orders = self.total_orders();
        if orders == 0 {
            return None;
        }
        Some(self.total_revenue()? / Decimal::from(orders))
    }

    /// Top customer states by total profit, descending.
    ///
    /// Joins customers, orders, line items, and products. Capped at
    /// [`STATE_ROWS`]; ties keep ascending state order.
    #[must_use]
    pub fn profit_by_state(&self) -> Vec<StateProfit> {
        let customers: BTreeMap<_, _> = self
            .customers
            .iter()
            .map(|customer| (customer.customer_id, customer))
            .collect();
        let orders = self.orders_by_number();
        let products = self.products_by_id();

        let mut by_state: BTreeMap<String, Decimal> = BTreeMap::new();
        for item in &self.line_items {
            let Some(order) = orders.get(&item.order_number) else {
                continue;
            };
            let Some(customer) = customers.get(&order.customer_id) else {
                continue;
            };
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let margin = product.product_price - product.product_cost;
            let profit = Decimal::from(item.quantity) * margin;
            *by_state.entry(customer.customer_state.clone()).or_default() += profit;
        }

        let mut rows: Vec<StateProfit> = by_state
            .into_iter()
            .map(|(customer_state, total_profit)| StateProfit {
                customer_state,
                total_profit,
            })
            .collect();
        rows.sort_by(|a, b| b.total_profit.cmp(&a.total_profit));
        rows.truncate(STATE_ROWS);
        rows
    }

    /// Top product categories by revenue, descending.
    ///
    /// Joins line items, products, subcategories, and categories; the
    /// orders table is not involved. Capped at [`CATEGORY_ROWS`].
    #[must_use]
    pub fn revenue_by_category(&self) -> Vec<CategoryRevenue> {
        let products = self.products_by_id();
        let subcategories: BTreeMap<_, _> = self
            .subcategories
            .iter()
            .map(|sub| (sub.product_subcategory_id, sub))
            .collect();
        let categories: BTreeMap<_, _> = self
            .categories
            .iter()
            .map(|category| (category.product_category_id, category))
            .collect();

        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        for item in &self.line_items {
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let Some(subcategory) = subcategories.get(&product.product_subcategory_id) else {
                continue;
            };
            let Some(category) = categories.get(&subcategory.product_category_id) else {
                continue;
            };
            let line = Decimal::from(item.quantity) * product.product_price;
            *by_category
                .entry(category.product_category.clone())
                .or_default() += line;
        }

        let mut rows: Vec<CategoryRevenue> = by_category
            .into_iter()
            .map(|(product_category, revenue)| CategoryRevenue {
                product_category,
                revenue,
            })
            .collect();
        rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        rows.truncate(CATEGORY_ROWS);
        rows
    }

    /// Units sold and average order value per year, ascending by year.
    ///
    /// Computed in two passes like the SQL: first units and revenue per
    /// `(year, order number)`, then per-year unit totals and the mean of
    /// the per-order revenue subtotals.
    #[must_use]
    pub fn yearly_sales(&self) -> Vec<YearlySales> {
        let orders = self.orders_by_number();
        let products = self.products_by_id();

        let mut per_order: BTreeMap<(i32, OrderNumber), (i64, Decimal)> = BTreeMap::new();
        for item in &self.line_items {
            let Some(order) = orders.get(&item.order_number) else {
                continue;
            };
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let line = Decimal::from(item.quantity) * product.product_price;
            let entry = per_order
                .entry((order.order_year, item.order_number))
                .or_default();
            entry.0 += i64::from(item.quantity);
            entry.1 += line;
        }

        let mut per_year: BTreeMap<i32, (i64, Decimal, i64)> = BTreeMap::new();
        for ((year, _), (units, revenue)) in per_order {
            let entry = per_year.entry(year).or_default();
            entry.0 += units;
            entry.1 += revenue;
            entry.2 += 1;
        }

        per_year
            .into_iter()
            .map(|(order_year, (units, revenue, order_count))| YearlySales {
                order_year,
                total_units_sold: units,
                avg_order_value: revenue / Decimal::from(order_count),
            })
            .collect()
    }

    /// Country and brand pairs ranked by profit, descending.
    ///
    /// Joins orders, stores, line items, and products. Capped at
    /// [`SUMMARY_ROWS`]; ties keep ascending country then brand order.
    #[must_use]
    pub fn country_brand_summary(&self) -> Vec<CountryBrandSales> {
        let orders = self.orders_by_number();
        let stores: BTreeMap<_, _> = self
            .stores
            .iter()
            .map(|store| (store.store_id, store))
            .collect();
        let products = self.products_by_id();

        let mut by_pair: BTreeMap<(String, String), (i64, Decimal, Decimal)> = BTreeMap::new();
        for item in &self.line_items {
            let Some(order) = orders.get(&item.order_number) else {
                continue;
            };
            let Some(store) = stores.get(&order.store_id) else {
                continue;
            };
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let quantity = Decimal::from(item.quantity);
            let entry = by_pair
                .entry((store.store_country.clone(), product.product_brand.clone()))
                .or_default();
            entry.0 += i64::from(item.quantity);
            entry.1 += quantity * product.product_price;
            entry.2 += quantity * (product.product_price - product.product_cost);
        }

        let mut rows: Vec<CountryBrandSales> = by_pair
            .into_iter()
            .map(
                |((store_country, product_brand), (units_sold, revenue, profit))| {
                    CountryBrandSales {
                        store_country,
                        product_brand,
                        units_sold,
                        revenue,
                        profit,
                    }
                },
            )
            .collect();
        rows.sort_by(|a, b| b.profit.cmp(&a.profit));
        rows.truncate(SUMMARY_ROWS);
        rows
    }

    fn products_by_id(&self) -> BTreeMap<ProductId, &Product> {
        self.products
            .iter()
            .map(|product| (product.product_id, product))
            .collect()
    }

    fn orders_by_number(&self) -> BTreeMap<OrderNumber, &Order> {
        self.orders
            .iter()
            .map(|order| (order.order_number, order))
            .collect()
    }
}

fn as_count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

// ============================================================================
// Demo data
// ============================================================================

impl RetailDataset {
    /// A small hand-written dataset for demos and local development.
    ///
    /// Covers three years, three store countries, seven customer states,
    /// and six product categories, so every leaderboard truncates and
    /// every chart has data. Order 1012 has no line items, which keeps
    /// the average order value distinct from plain revenue per order.
    #[must_use]
    pub fn demo() -> Self {
        fn customer(id: i32, name: &str, state: &str) -> Customer {
            Customer {
                customer_id: id.into(),
                customer_name: name.to_owned(),
                customer_state: state.to_owned(),
            }
        }

        fn store(id: i32, name: &str, country: &str) -> Store {
            Store {
                store_id: id.into(),
                store_name: name.to_owned(),
                store_country: country.to_owned(),
            }
        }

        fn category(id: i32, name: &str) -> Category {
            Category {
                product_category_id: id.into(),
                product_category: name.to_owned(),
            }
        }

        fn subcategory(id: i32, name: &str, category_id: i32) -> Subcategory {
            Subcategory {
                product_subcategory_id: id.into(),
                product_subcategory: name.to_owned(),
                product_category_id: category_id.into(),
            }
        }

        fn product(
            id: i32,
            name: &str,
            brand: &str,
            price_cents: i64,
            cost_cents: i64,
            subcategory_id: i32,
        ) -> Product {
            Product {
                product_id: id.into(),
                product_name: name.to_owned(),
                product_brand: brand.to_owned(),
                product_price: Decimal::new(price_cents, 2),
                product_cost: Decimal::new(cost_cents, 2),
                product_subcategory_id: subcategory_id.into(),
            }
        }

        fn order(number: i32, year: i32, customer_id: i32, store_id: i32) -> Order {
            Order {
                order_number: number.into(),
                order_year: year,
                customer_id: customer_id.into(),
                store_id: store_id.into(),
            }
        }

        fn line_item(order_number: i32, product_id: i32, quantity: i32) -> OrderLineItem {
            OrderLineItem {
                order_number: order_number.into(),
                product_id: product_id.into(),
                quantity,
            }
        }

        Self {
            customers: vec![
                customer(1, "Ada Flynn", "CA"),
                customer(2, "Noah Reyes", "TX"),
                customer(3, "Mia Osei", "WA"),
                customer(4, "Liam Cho", "NY"),
                customer(5, "Ava Horvat", "FL"),
                customer(6, "Ena Kovic", "IL"),
                customer(7, "Leo Marsh", "CO"),
                customer(8, "Zoe Lindgren", "CA"),
            ],
            stores: vec![
                store(1, "Seattle Flagship", "United States"),
                store(2, "Toronto Midtown", "Canada"),
                store(3, "Manchester Arndale", "United Kingdom"),
            ],
            categories: vec![
                category(1, "Audio"),
                category(2, "Computers"),
                category(3, "Cameras"),
                category(4, "Phones"),
                category(5, "TV and Video"),
                category(6, "Appliances"),
            ],
            subcategories: vec![
                subcategory(1, "Headphones", 1),
                subcategory(2, "Speakers", 1),
                subcategory(3, "Laptops", 2),
                subcategory(4, "Desktops", 2),
                subcategory(5, "Mirrorless Cameras", 3),
                subcategory(6, "Smartphones", 4),
                subcategory(7, "Televisions", 5),
                subcategory(8, "Refrigerators", 6),
            ],
            products: vec![
                product(1, "Over-Ear Headphones", "Voltaic", 12_000, 4_800, 1),
                product(2, "Bookshelf Speakers", "Brightline", 22_000, 9_500, 2),
                product(3, "14in Ultrabook", "Nimbus", 115_000, 72_000, 3),
                product(4, "Gaming Desktop", "Nimbus", 160_000, 104_000, 4),
                product(5, "Mirrorless Camera", "Cascade", 89_900, 54_000, 5),
                product(6, "Smartphone 128GB", "Voltaic", 69_900, 43_000, 6),
                product(7, "55in 4K Television", "Brightline", 62_000, 41_000, 7),
                product(8, "French-Door Refrigerator", "Cascade", 185_000, 123_000, 8),
                product(9, "Wireless Earbuds", "Voltaic", 8_900, 3_100, 1),
                product(10, "Budget Laptop", "Brightline", 48_000, 30_500, 3),
            ],
            orders: vec![
                order(1001, 2021, 1, 1),
                order(1002, 2021, 2, 1),
                order(1003, 2021, 3, 2),
                order(1004, 2022, 4, 1),
                order(1005, 2022, 5, 3),
                order(1006, 2022, 6, 2),
                order(1007, 2022, 1, 1),
                order(1008, 2023, 7, 3),
                order(1009, 2023, 8, 1),
                order(1010, 2023, 2, 2),
                order(1011, 2023, 3, 1),
                order(1012, 2023, 4, 2),
            ],
            line_items: vec![
                line_item(1001, 1, 2),
                line_item(1001, 9, 1),
                line_item(1002, 3, 1),
                line_item(1003, 7, 1),
                line_item(1003, 2, 2),
                line_item(1004, 4, 1),
                line_item(1004, 1, 1),
                line_item(1005, 8, 1),
                line_item(1006, 6, 2),
                line_item(1007, 10, 3),
                line_item(1008, 5, 1),
                line_item(1008, 9, 2),
                line_item(1009, 6, 1),
                line_item(1009, 7, 1),
                line_item(1010, 2, 1),
                line_item(1010, 10, 1),
                line_item(1011, 3, 1),
                line_item(1011, 9, 1),
            ],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Two customers, two single-item orders in the same year.
    ///
    /// Order 1001 buys 3 units at $10 (cost $4), order 1002 buys 5 units
    /// at $20 (cost $8).
    fn fixture() -> RetailDataset {
        RetailDataset {
            customers: vec![
                Customer {
                    customer_id: 1.into(),
                    customer_name: "Ada Flynn".to_owned(),
                    customer_state: "CA".to_owned(),
                },
                Customer {
                    customer_id: 2.into(),
                    customer_name: "Noah Reyes".to_owned(),
                    customer_state: "TX".to_owned(),
                },
            ],
            stores: vec![Store {
                store_id: 1.into(),
                store_name: "Seattle Flagship".to_owned(),
                store_country: "United States".to_owned(),
            }],
            categories: vec![
                Category {
                    product_category_id: 1.into(),
                    product_category: "Audio".to_owned(),
                },
                Category {
                    product_category_id: 2.into(),
                    product_category: "Computers".to_owned(),
                },
            ],
            subcategories: vec![
                Subcategory {
                    product_subcategory_id: 1.into(),
                    product_subcategory: "Headphones".to_owned(),
                    product_category_id: 1.into(),
                },
                Subcategory {
                    product_subcategory_id: 2.into(),
                    product_subcategory: "Laptops".to_owned(),
                    product_category_id: 2.into(),
                },
            ],
            products: vec![
                Product {
                    product_id: 1.into(),
                    product_name: "Wired Earbuds".to_owned(),
                    product_brand: "Voltaic".to_owned(),
                    product_price: Decimal::from(10),
                    product_cost: Decimal::from(4),
                    product_subcategory_id: 1.into(),
                },
                Product {
                    product_id: 2.into(),
                    product_name: "Netbook".to_owned(),
                    product_brand: "Nimbus".to_owned(),
                    product_price: Decimal::from(20),
                    product_cost: Decimal::from(8),
                    product_subcategory_id: 2.into(),
                },
            ],
            orders: vec![
                Order {
                    order_number: 1001.into(),
                    order_year: 2023,
                    customer_id: 1.into(),
                    store_id: 1.into(),
                },
                Order {
                    order_number: 1002.into(),
                    order_year: 2023,
                    customer_id: 2.into(),
                    store_id: 1.into(),
                },
            ],
            line_items: vec![
                OrderLineItem {
                    order_number: 1001.into(),
                    product_id: 1.into(),
                    quantity: 3,
                },
                OrderLineItem {
                    order_number: 1002.into(),
                    product_id: 2.into(),
                    quantity: 5,
                },
            ],
        }
    }

    fn itemless_order(number: i32) -> Order {
        Order {
            order_number: number.into(),
            order_year: 2023,
            customer_id: 1.into(),
            store_id: 1.into(),
        }
    }

    #[test]
    fn test_total_revenue_sums_quantity_times_price() {
        assert_eq!(fixture().total_revenue(), Some(Decimal::from(130)));
    }

    #[test]
    fn test_total_orders_counts_distinct_order_numbers() {
        assert_eq!(fixture().total_orders(), 2);
    }

    #[test]
    fn test_order_subtotals_are_ascending_and_sum_to_total_revenue() {
        let dataset = fixture();
        let subtotals = dataset.order_revenue_subtotals();
        assert_eq!(subtotals, vec![Decimal::from(30), Decimal::from(100)]);
        assert_eq!(
            Some(subtotals.iter().sum::<Decimal>()),
            dataset.total_revenue()
        );
    }

    #[test]
    fn test_average_order_value_is_mean_of_order_subtotals() {
        assert_eq!(fixture().average_order_value(), Some(Decimal::from(65)));
    }

    #[test]
    fn test_empty_dataset_reports_no_metrics() {
        let dataset = RetailDataset::default();
        assert_eq!(dataset.total_revenue(), None);
        assert_eq!(dataset.total_orders(), 0);
        assert_eq!(dataset.average_order_value(), None);
        assert_eq!(dataset.revenue_per_order(), None);
        assert!(dataset.order_revenue_subtotals().is_empty());
        assert!(dataset.profit_by_state().is_empty());
        assert!(dataset.revenue_by_category().is_empty());
        assert!(dataset.yearly_sales().is_empty());
        assert!(dataset.country_brand_summary().is_empty());
    }

    #[test]
    fn test_itemless_order_counts_toward_orders_but_not_average() {
        let mut dataset = fixture();
        dataset.orders.push(itemless_order(1003));

        assert_eq!(dataset.total_orders(), 3);
        assert_eq!(dataset.average_order_value(), Some(Decimal::from(65)));
        assert_eq!(
            dataset.revenue_per_order(),
            Some(Decimal::from(130) / Decimal::from(3))
        );
        assert_ne!(dataset.average_order_value(), dataset.revenue_per_order());
    }

    #[test]
    fn test_averages_agree_when_every_order_has_line_items() {
        let dataset = fixture();
        assert_eq!(dataset.average_order_value(), dataset.revenue_per_order());
    }

    #[test]
    fn test_revenue_counts_dangling_line_items_but_averages_do_not() {
        let mut dataset = fixture();
        dataset.line_items.push(OrderLineItem {
            order_number: 9999.into(),
            product_id: 1.into(),
            quantity: 1,
        });

        // The revenue query never joins the orders table, so a line item
        // pointing at a missing order still sells.
        assert_eq!(dataset.total_revenue(), Some(Decimal::from(140)));
        assert_eq!(dataset.average_order_value(), Some(Decimal::from(65)));
    }

    #[test]
    fn test_line_items_without_matching_product_are_ignored() {
        let mut dataset = fixture();
        dataset.line_items.push(OrderLineItem {
            order_number: 1001.into(),
            product_id: 99.into(),
            quantity: 7,
        });

        assert_eq!(dataset.total_revenue(), Some(Decimal::from(130)));
        assert_eq!(dataset.average_order_value(), Some(Decimal::from(65)));
    }

    #[test]
    fn test_profit_by_state_sorts_descending() {
        let rows = fixture().profit_by_state();
        assert_eq!(
            rows,
            vec![
                StateProfit {
                    customer_state: "TX".to_owned(),
                    total_profit: Decimal::from(60),
                },
                StateProfit {
                    customer_state: "CA".to_owned(),
                    total_profit: Decimal::from(18),
                },
            ]
        );
    }

    #[test]
    fn test_profit_by_state_keeps_only_top_states() {
        let states = ["AK", "AZ", "CA", "CO", "FL", "GA", "HI"];
        let mut dataset = RetailDataset {
            stores: fixture().stores,
            products: vec![Product {
                product_id: 1.into(),
                product_name: "Wired Earbuds".to_owned(),
                product_brand: "Voltaic".to_owned(),
                product_price: Decimal::from(10),
                product_cost: Decimal::from(4),
                product_subcategory_id: 1.into(),
            }],
            ..RetailDataset::default()
        };
        for (index, state) in states.iter().enumerate() {
            let id = i32::try_from(index).unwrap() + 1;
            dataset.customers.push(Customer {
                customer_id: id.into(),
                customer_name: format!("Customer {id}"),
                customer_state: (*state).to_owned(),
            });
            dataset.orders.push(Order {
                order_number: (1000 + id).into(),
                order_year: 2023,
                customer_id: id.into(),
                store_id: 1.into(),
            });
            dataset.line_items.push(OrderLineItem {
                order_number: (1000 + id).into(),
                product_id: 1.into(),
                quantity: id,
            });
        }

        let rows = dataset.profit_by_state();
        assert_eq!(rows.len(), STATE_ROWS);
        // Quantity grows with the state index, so AK sells the least.
        assert!(rows.iter().all(|row| row.customer_state != "AK"));
        let top = rows.first().unwrap();
        assert_eq!(top.customer_state, "HI");
        assert_eq!(top.total_profit, Decimal::from(42));
    }

    #[test]
    fn test_revenue_by_category_keeps_only_top_categories() {
        let mut dataset = RetailDataset::default();
        for id in 1..=6 {
            dataset.categories.push(Category {
                product_category_id: id.into(),
                product_category: format!("Category {id}"),
            });
            dataset.subcategories.push(Subcategory {
                product_subcategory_id: id.into(),
                product_subcategory: format!("Subcategory {id}"),
                product_category_id: id.into(),
            });
            dataset.products.push(Product {
                product_id: id.into(),
                product_name: format!("Product {id}"),
                product_brand: "Voltaic".to_owned(),
                product_price: Decimal::from(id * 10),
                product_cost: Decimal::from(id),
                product_subcategory_id: id.into(),
            });
            dataset.line_items.push(OrderLineItem {
                order_number: 1001.into(),
                product_id: id.into(),
                quantity: 1,
            });
        }

        let rows = dataset.revenue_by_category();
        assert_eq!(rows.len(), CATEGORY_ROWS);
        assert!(rows.iter().all(|row| row.product_category != "Category 1"));
        let top = rows.first().unwrap();
        assert_eq!(top.product_category, "Category 6");
        assert_eq!(top.revenue, Decimal::from(60));
    }

    #[test]
    fn test_yearly_sales_averages_per_order_revenue_within_each_year() {
        let mut dataset = fixture();
        // 2023 already has orders worth 30 and 100. Add a 2024 order
        // buying 2 units at $20.
        dataset.orders.push(Order {
            order_number: 1003.into(),
            order_year: 2024,
            customer_id: 1.into(),
            store_id: 1.into(),
        });
        dataset.line_items.push(OrderLineItem {
            order_number: 1003.into(),
            product_id: 2.into(),
            quantity: 2,
        });

        assert_eq!(
            dataset.yearly_sales(),
            vec![
                YearlySales {
                    order_year: 2023,
                    total_units_sold: 8,
                    avg_order_value: Decimal::from(65),
                },
                YearlySales {
                    order_year: 2024,
                    total_units_sold: 2,
                    avg_order_value: Decimal::from(40),
                },
            ]
        );
    }

    #[test]
    fn test_country_brand_summary_groups_and_sorts_by_profit() {
        let mut dataset = fixture();
        dataset.stores.push(Store {
            store_id: 2.into(),
            store_name: "Toronto Midtown".to_owned(),
            store_country: "Canada".to_owned(),
        });
        // A Canadian order for 2 more earbud units.
        dataset.orders.push(Order {
            order_number: 1003.into(),
            order_year: 2023,
            customer_id: 1.into(),
            store_id: 2.into(),
        });
        dataset.line_items.push(OrderLineItem {
            order_number: 1003.into(),
            product_id: 1.into(),
            quantity: 2,
        });

        assert_eq!(
            dataset.country_brand_summary(),
            vec![
                CountryBrandSales {
                    store_country: "United States".to_owned(),
                    product_brand: "Nimbus".to_owned(),
                    units_sold: 5,
                    revenue: Decimal::from(100),
                    profit: Decimal::from(60),
                },
                CountryBrandSales {
                    store_country: "United States".to_owned(),
                    product_brand: "Voltaic".to_owned(),
                    units_sold: 3,
                    revenue: Decimal::from(30),
                    profit: Decimal::from(18),
                },
                CountryBrandSales {
                    store_country: "Canada".to_owned(),
                    product_brand: "Voltaic".to_owned(),
                    units_sold: 2,
                    revenue: Decimal::from(20),
                    profit: Decimal::from(12),
                },
            ]
        );
    }

    #[test]
    fn test_demo_dataset_exercises_every_view() {
        let dataset = RetailDataset::demo();

        let order_numbers: BTreeSet<OrderNumber> =
            dataset.orders.iter().map(|o| o.order_number).collect();
        let product_ids: BTreeSet<ProductId> =
            dataset.products.iter().map(|p| p.product_id).collect();
        for item in &dataset.line_items {
            assert!(order_numbers.contains(&item.order_number));
            assert!(product_ids.contains(&item.product_id));
        }

        assert_eq!(dataset.total_orders(), 12);
        assert!(dataset.total_revenue().unwrap() > Decimal::ZERO);
        // Order 1012 has no line items, so the two averages diverge.
        assert_ne!(dataset.average_order_value(), dataset.revenue_per_order());
        assert_eq!(dataset.profit_by_state().len(), STATE_ROWS);
        assert_eq!(dataset.revenue_by_category().len(), CATEGORY_ROWS);
        assert_eq!(dataset.yearly_sales().len(), 3);
        assert!(!dataset.country_brand_summary().is_empty());
    }
}
