//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use genewatch_common::GeneRisk;
use genewatch_feed::{FeedCache, FeedSource, HttpFeedSource};
use genewatch_ranker::{dataset::load_gene_file, seed::seed_genes};
use tracing::info;

use crate::config::Config;

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Gene set fixed at start-up; handlers only read it.
    pub genes: Vec<GeneRisk>,
    pub feed: FeedCache,
}

impl AppState {
    pub fn new(genes: Vec<GeneRisk>, feed_source: Arc<dyn FeedSource>, cache_timeout: Duration) -> Self {
        Self {
            genes,
            feed: FeedCache::new(feed_source, cache_timeout),
        }
    }

    /// Build state from configuration: gene set from the configured data
    /// file (or the built-in seed set) and an HTTP feed source.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let genes = match &config.genes.data_file {
            Some(path) => load_gene_file(path)
                .with_context(|| format!("Failed to load gene data from {}", path.display()))?,
            None => {
                info!("No gene data file configured; serving built-in gene set");
                seed_genes()
            }
        };

        let source = HttpFeedSource::new(
            config.feed.url.clone(),
            Duration::from_secs(config.feed.request_timeout_secs),
            &config.feed.user_agent,
        )?;

        info!(
            feed_url = %config.feed.url,
            cache_timeout_secs = config.feed.cache_timeout_secs,
            n_genes = genes.len(),
            "Application state ready"
        );

        Ok(Self::new(
            genes,
            Arc::new(source),
            Duration::from_secs(config.feed.cache_timeout_secs),
        ))
    }
}

pub type SharedState = Arc<AppState>;
