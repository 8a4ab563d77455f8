//! Time-bounded cache in front of a [`FeedSource`].
//!
//! Fresh bodies are served under a read lock. On expiry one task takes the
//! write lock, re-checks freshness and fetches; the others wait and then read
//! what it stored, so there is at most one upstream fetch per window.
//! Failed fetches are not cached.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::source::FeedSource;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: Arc<str>,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: TimeDelta) -> bool {
        Utc::now() - self.fetched_at < ttl
    }
}

pub struct FeedCache {
    source: Arc<dyn FeedSource>,
    ttl: TimeDelta,
    entry: RwLock<Option<CacheEntry>>,
}

impl FeedCache {
    pub fn new(source: Arc<dyn FeedSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            entry: RwLock::new(None),
        }
    }

    /// Return the cached body, fetching it first if missing or stale.
    pub async fn get(&self) -> anyhow::Result<Arc<str>> {
        if let Some(entry) = self.entry.read().await.as_ref() {
            if entry.is_fresh(self.ttl) {
                debug!(source = self.source.describe(), "Feed cache hit");
                return Ok(entry.body.clone());
            }
        }

        let mut guard = self.entry.write().await;
        // Another task may have refreshed while we waited for the lock
        if let Some(entry) = guard.as_ref() {
            if entry.is_fresh(self.ttl) {
                return Ok(entry.body.clone());
            }
        }

        let body: Arc<str> = match self.source.fetch().await {
            Ok(body) => body.into(),
            Err(e) => {
                warn!(source = self.source.describe(), error = %e, "Feed fetch failed");
                return Err(e);
            }
        };

        info!(source = self.source.describe(), bytes = body.len(), "Feed cache refreshed");
        *guard = Some(CacheEntry {
            body: body.clone(),
            fetched_at: Utc::now(),
        });
        Ok(body)
    }

    /// Drop the cached body so the next [`get`](Self::get) fetches again.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}
