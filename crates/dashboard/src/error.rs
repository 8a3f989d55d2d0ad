//! Unified error handling for the dashboard.
//!
//! Every failure surfaces as a rendered error page that names the
//! operation that failed. The dashboard never retries a failed query;
//! reloading the page re-runs it.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::filters;

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// One of the catalog queries failed.
    #[error("{operation} query failed: {source}")]
    Query {
        operation: String,
        source: RepositoryError,
    },

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Wrap a repository failure with the name of the operation that ran it.
    pub fn query(operation: impl Into<String>, source: RepositoryError) -> Self {
        Self::Query {
            operation: operation.into(),
            source,
        }
    }
}

/// Error page rendered inside the dashboard chrome.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    current_path: String,
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Query { .. } | Self::Render(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Dashboard request error"
            );
        }

        let status = match &self {
            Self::Query { .. } | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Name the failing operation without exposing driver details
        let message = match &self {
            Self::Query { operation, .. } => {
                format!("The {operation} query could not be completed.")
            }
            Self::Render(_) => "Something went wrong rendering this page.".to_string(),
            Self::NotFound(what) => format!("{what} is not part of this dashboard."),
        };

        let page = ErrorTemplate {
            current_path: String::new(),
            status: status.as_u16(),
            message: message.clone(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render error page");
                (status, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_error() -> AppError {
        AppError::query(
            "total revenue",
            RepositoryError::Database(sqlx::Error::PoolClosed),
        )
    }

    #[test]
    fn test_app_error_display_names_the_operation() {
        let err = query_error();
        assert!(err.to_string().starts_with("total revenue query failed:"));

        let err = AppError::NotFound("Table 'invoices'".to_string());
        assert_eq!(err.to_string(), "Not found: Table 'invoices'");
    }

    #[test]
    fn test_app_error_status_codes() {
        // Test that errors map to correct HTTP status codes
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(query_error()), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
