//! Integration tests for the warehouse metric catalog.
//!
//! These tests require a scratch `PostgreSQL` database with migrations
//! applied (`cargo run -p salesboard-cli -- migrate`), named by the
//! `DASHBOARD_DB_*` environment variables. Every test replaces the
//! warehouse contents, so run them single-threaded:
//!
//! ```bash
//! cargo test -p salesboard-integration-tests --test metrics_queries -- --ignored --test-threads=1
//! ```

use rust_decimal::Decimal;

use salesboard_core::{
    CATEGORY_ROWS, Category, Customer, Order, OrderLineItem, Product, RetailDataset, STATE_ROWS,
    Store, Subcategory,
};
use salesboard_dashboard::db::{MetricsRepository, PreviewRepository};
use salesboard_integration_tests::{clear_warehouse, load_dataset, warehouse_pool};

/// Two customers in different states, one store, two single-item orders:
/// 3 units at $10 (cost $4) and 5 units at $20 (cost $8).
fn known_fixture() -> RetailDataset {
    RetailDataset {
        customers: vec![
            Customer {
                customer_id: 1.into(),
                customer_name: "Ada Flynn".to_string(),
                customer_state: "CA".to_string(),
            },
            Customer {
                customer_id: 2.into(),
                customer_name: "Noah Reyes".to_string(),
                customer_state: "TX".to_string(),
            },
        ],
        stores: vec![Store {
            store_id: 1.into(),
            store_name: "Seattle Flagship".to_string(),
            store_country: "United States".to_string(),
        }],
        categories: vec![
            Category {
                product_category_id: 1.into(),
                product_category: "Audio".to_string(),
            },
            Category {
                product_category_id: 2.into(),
                product_category: "Computers".to_string(),
            },
        ],
        subcategories: vec![
            Subcategory {
                product_subcategory_id: 1.into(),
                product_subcategory: "Headphones".to_string(),
                product_category_id: 1.into(),
            },
            Subcategory {
                product_subcategory_id: 2.into(),
                product_subcategory: "Laptops".to_string(),
                product_category_id: 2.into(),
            },
        ],
        products: vec![
            Product {
                product_id: 1.into(),
                product_name: "Wired Earbuds".to_string(),
                product_brand: "Voltaic".to_string(),
                product_price: Decimal::from(10),
                product_cost: Decimal::from(4),
                product_subcategory_id: 1.into(),
            },
            Product {
                product_id: 2.into(),
                product_name: "Netbook".to_string(),
                product_brand: "Nimbus".to_string(),
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

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_kpi_queries_on_the_known_fixture() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;
    load_dataset(&pool, &known_fixture()).await;

    let repo = MetricsRepository::new(&pool);

    // 3 * $10 + 5 * $20
    let revenue = repo.total_revenue().await.expect("total revenue query");
    assert_eq!(revenue, Some(Decimal::from(130)));

    let orders = repo.total_orders().await.expect("total orders query");
    assert_eq!(orders, 2);

    // ($30 + $100) / 2
    let aov = repo
        .average_order_value()
        .await
        .expect("average order value query");
    assert_eq!(aov, Some(Decimal::from(65)));
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_leaderboard_queries_sort_descending() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;
    load_dataset(&pool, &known_fixture()).await;

    let repo = MetricsRepository::new(&pool);

    let states = repo.profit_by_state().await.expect("profit by state query");
    let rows: Vec<(&str, Decimal)> = states
        .iter()
        .map(|row| (row.customer_state.as_str(), row.total_profit))
        .collect();
    assert_eq!(
        rows,
        vec![("TX", Decimal::from(60)), ("CA", Decimal::from(18))]
    );

    let categories = repo
        .revenue_by_category()
        .await
        .expect("revenue by category query");
    let rows: Vec<(&str, Decimal)> = categories
        .iter()
        .map(|row| (row.product_category.as_str(), row.revenue))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Computers", Decimal::from(100)),
            ("Audio", Decimal::from(30)),
        ]
    );
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_yearly_and_summary_queries_on_the_known_fixture() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;
    load_dataset(&pool, &known_fixture()).await;

    let repo = MetricsRepository::new(&pool);

    let yearly = repo.yearly_sales().await.expect("yearly sales query");
    assert_eq!(yearly.len(), 1);
    let year = yearly.first().expect("one yearly row");
    assert_eq!(year.order_year, 2023);
    assert_eq!(year.total_units_sold, 8);
    assert_eq!(year.avg_order_value, Decimal::from(65));

    let summary = repo
        .country_brand_summary()
        .await
        .expect("country brand summary query");
    let rows: Vec<(&str, &str, i64, Decimal)> = summary
        .iter()
        .map(|row| {
            (
                row.store_country.as_str(),
                row.product_brand.as_str(),
                row.units_sold,
                row.profit,
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("United States", "Nimbus", 5, Decimal::from(60)),
            ("United States", "Voltaic", 3, Decimal::from(18)),
        ]
    );
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_nested_average_diverges_from_flat_ratio_with_an_itemless_order() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;

    let mut dataset = known_fixture();
    dataset.orders.push(Order {
        order_number: 1003.into(),
        order_year: 2023,
        customer_id: 1.into(),
        store_id: 1.into(),
    });
    load_dataset(&pool, &dataset).await;

    let repo = MetricsRepository::new(&pool);

    // The itemless order raises the order count but never produces a
    // per-order subtotal, so the nested average stays at $65 while the
    // flat ratio drops to 130/3.
    let orders = repo.total_orders().await.expect("total orders query");
    assert_eq!(orders, 3);

    let aov = repo
        .average_order_value()
        .await
        .expect("average order value query")
        .expect("orders with line items exist");
    assert_eq!(aov, Decimal::from(65));

    let revenue = repo
        .total_revenue()
        .await
        .expect("total revenue query")
        .expect("line items exist");
    let flat_ratio = revenue / Decimal::from(orders);
    assert_ne!(aov.round_dp(6), flat_ratio.round_dp(6));

    // The in-memory reference agrees with the live SQL on both forms.
    assert_eq!(dataset.average_order_value(), Some(aov));
    assert_eq!(
        dataset.revenue_per_order().map(|v| v.round_dp(6)),
        Some(flat_ratio.round_dp(6))
    );
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_sql_catalog_matches_the_reference_dataset_on_demo_data() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;

    let dataset = RetailDataset::demo();
    load_dataset(&pool, &dataset).await;

    let repo = MetricsRepository::new(&pool);

    assert_eq!(
        repo.total_revenue().await.expect("total revenue query"),
        dataset.total_revenue()
    );
    assert_eq!(
        repo.total_orders().await.expect("total orders query"),
        dataset.total_orders()
    );
    assert_eq!(
        repo.average_order_value()
            .await
            .expect("average order value query")
            .map(|v| v.round_dp(6)),
        dataset.average_order_value().map(|v| v.round_dp(6))
    );

    let states = repo.profit_by_state().await.expect("profit by state query");
    assert_eq!(states.len(), STATE_ROWS);
    assert_eq!(states, dataset.profit_by_state());

    let categories = repo
        .revenue_by_category()
        .await
        .expect("revenue by category query");
    assert_eq!(categories.len(), CATEGORY_ROWS);
    assert_eq!(categories, dataset.revenue_by_category());

    let yearly = repo.yearly_sales().await.expect("yearly sales query");
    let reference = dataset.yearly_sales();
    assert_eq!(yearly.len(), reference.len());
    for (live, expected) in yearly.iter().zip(&reference) {
        assert_eq!(live.order_year, expected.order_year);
        assert_eq!(live.total_units_sold, expected.total_units_sold);
        assert_eq!(
            live.avg_order_value.round_dp(6),
            expected.avg_order_value.round_dp(6)
        );
    }

    assert_eq!(
        repo.country_brand_summary()
            .await
            .expect("country brand summary query"),
        dataset.country_brand_summary()
    );
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_empty_warehouse_reports_no_data_instead_of_failing() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;

    let repo = MetricsRepository::new(&pool);

    assert_eq!(repo.total_revenue().await.expect("total revenue"), None);
    assert_eq!(repo.total_orders().await.expect("total orders"), 0);
    assert_eq!(
        repo.average_order_value().await.expect("average order value"),
        None
    );
    assert!(repo.profit_by_state().await.expect("profit").is_empty());
    assert!(repo.revenue_by_category().await.expect("revenue").is_empty());
    assert!(repo.yearly_sales().await.expect("yearly").is_empty());
    assert!(
        repo.country_brand_summary()
            .await
            .expect("summary")
            .is_empty()
    );
}

#[tokio::test]
#[ignore = "Requires a scratch warehouse database"]
async fn test_table_previews_cap_at_one_thousand_rows() {
    let pool = warehouse_pool().await;
    clear_warehouse(&pool).await;

    let mut dataset = RetailDataset::default();
    for id in 1..=1_100 {
        dataset.customers.push(Customer {
            customer_id: id.into(),
            customer_name: format!("Customer {id}"),
            customer_state: "CA".to_string(),
        });
    }
    load_dataset(&pool, &dataset).await;

    let repo = PreviewRepository::new(&pool);
    let preview = repo.customers().await.expect("customers preview query");

    assert_eq!(preview.row_count(), 1_000);
    let labels: Vec<&str> = preview
        .columns
        .iter()
        .map(|column| column.label.as_str())
        .collect();
    assert_eq!(labels, ["Customer ID", "Customer Name", "Customer State"]);
}
