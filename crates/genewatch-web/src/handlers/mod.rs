//! HTTP handlers for all web routes.

pub mod genes;
pub mod rss;

use axum::http::Uri;
use genewatch_common::ApiError;

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
