//! Raw table preview pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::components::DataTable;
use crate::db::PreviewRepository;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::views::View;

/// Table preview template.
#[derive(Template, WebTemplate)]
#[template(path = "table.html")]
pub struct TableTemplate {
    pub current_path: String,
    pub title: &'static str,
    pub row_count: String,
    pub table: DataTable,
}

/// Display the first rows of one warehouse table.
#[instrument(skip(state))]
pub async fn table_preview(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<TableTemplate, AppError> {
    let Some(view) = View::from_table_slug(&slug) else {
        return Err(AppError::NotFound(format!("Table '{slug}'")));
    };

    let repo = PreviewRepository::new(state.pool());
    let table = match view {
        View::Customers => repo.customers().await,
        View::Stores => repo.stores().await,
        View::Products => repo.products().await,
        View::Categories => repo.categories().await,
        View::Subcategories => repo.subcategories().await,
        View::Orders => repo.orders().await,
        View::OrderLineItems => repo.order_line_items().await,
        View::Overview | View::Dashboard => {
            return Err(AppError::NotFound(format!("Table '{slug}'")));
        }
    }
    .map_err(|e| AppError::query(format!("{} preview", view.title()), e))?;

    let row_count = filters::group_thousands(&table.row_count().to_string());
    Ok(TableTemplate {
        current_path: view.path().to_string(),
        title: view.title(),
        row_count,
        table,
    })
}
