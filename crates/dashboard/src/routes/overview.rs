//! Project overview page.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// Project overview template.
#[derive(Template, WebTemplate)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub current_path: String,
}

/// Display the project overview.
#[instrument]
pub async fn overview() -> OverviewTemplate {
    OverviewTemplate {
        current_path: "/".to_string(),
    }
}
