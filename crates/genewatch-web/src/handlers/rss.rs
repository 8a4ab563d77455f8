//! News feed proxy API.

use axum::{extract::State, Json};
use genewatch_common::ApiError;
use genewatch_feed::{parse_feed, Article};
use tracing::warn;

use crate::state::SharedState;

pub const FETCH_FAILED: &str = "Failed to fetch RSS feed";
pub const PARSE_FAILED: &str = "Failed to parse RSS feed";

/// GET /get/rss — cached upstream feed, one JSON object per item
pub async fn api_rss(State(state): State<SharedState>) -> Result<Json<Vec<Article>>, ApiError> {
    let body = state.feed.get().await.map_err(|e| {
        warn!(error = %e, "Feed unavailable");
        ApiError::Internal(FETCH_FAILED.to_string())
    })?;

    match parse_feed(&body) {
        Ok(articles) => Ok(Json(articles)),
        Err(e) => {
            warn!(error = %e, "Feed could not be parsed; dropping cached body");
            state.feed.invalidate().await;
            Err(ApiError::Internal(PARSE_FAILED.to_string()))
        }
    }
}
