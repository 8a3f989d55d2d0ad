//! Integration tests for the rendered dashboard pages.
//!
//! These tests require:
//! - A running `PostgreSQL` warehouse with migrations applied
//! - The dashboard server running (cargo run -p salesboard-dashboard)
//!
//! Seed demo data first so every chart has rows:
//!
//! ```bash
//! cargo run -p salesboard-cli -- seed
//! cargo test -p salesboard-integration-tests --test dashboard_pages -- --ignored
//! ```

use reqwest::StatusCode;

use salesboard_integration_tests::{client, dashboard_base_url};

#[tokio::test]
#[ignore = "Requires a running dashboard server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = dashboard_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get /health");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("health body"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get /health/ready");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running dashboard server"]
async fn test_overview_page_renders() {
    let client = client();
    let base_url = dashboard_base_url();

    let resp = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get overview");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("overview body");
    assert!(body.contains("Retail Sales Analytics Dashboard"));
    // The sidebar links every view
    assert!(body.contains("href=\"/dashboard\""));
    assert!(body.contains("href=\"/tables/order-line-items\""));
}

#[tokio::test]
#[ignore = "Requires a running dashboard server"]
async fn test_main_dashboard_renders_kpis_and_charts() {
    let client = client();
    let base_url = dashboard_base_url();

    let resp = client
        .get(format!("{base_url}/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("dashboard body");
    assert!(body.contains("Total Revenue"));
    assert!(body.contains("Total Orders"));
    assert!(body.contains("Avg Order Value"));
    assert!(body.contains("Total Profit by Customer State"));
    assert!(body.contains("Revenue by Product Category"));
    assert!(body.contains("Yearly Units Sold"));
    assert!(body.contains("Store Country"));
}

#[tokio::test]
#[ignore = "Requires a running dashboard server"]
async fn test_every_table_preview_renders() {
    let client = client();
    let base_url = dashboard_base_url();

    let previews = [
        ("customers", "Customers"),
        ("stores", "Stores"),
        ("products", "Products"),
        ("categories", "Categories"),
        ("subcategories", "Subcategories"),
        ("orders", "Orders"),
        ("order-line-items", "Order Line Items"),
    ];

    for (slug, title) in previews {
        let resp = client
            .get(format!("{base_url}/tables/{slug}"))
            .send()
            .await
            .unwrap_or_else(|e| panic!("Failed to get /tables/{slug}: {e}"));
        assert_eq!(resp.status(), StatusCode::OK, "/tables/{slug}");

        let body = resp.text().await.expect("preview body");
        assert!(
            body.contains(&format!("{title} Table Preview")),
            "/tables/{slug} is missing its heading"
        );
    }
}

#[tokio::test]
#[ignore = "Requires a running dashboard server"]
async fn test_unknown_table_returns_not_found() {
    let client = client();
    let base_url = dashboard_base_url();

    let resp = client
        .get(format!("{base_url}/tables/invoices"))
        .send()
        .await
        .expect("Failed to get unknown table");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = resp.text().await.expect("error body");
    assert!(body.contains("Page not found"));
}
