//! Upstream feed sources.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Something that can produce the raw feed document.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current feed body.
    async fn fetch(&self) -> anyhow::Result<String>;

    /// Where the feed comes from, for logs.
    fn describe(&self) -> &str;
}

/// Fetches a feed over HTTP(S).
pub struct HttpFeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build feed HTTP client")?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> anyhow::Result<String> {
        let resp = self.client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Feed request to {} failed", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Feed request to {} returned {}", self.url, status);
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "Fetched feed");
        Ok(body)
    }

    fn describe(&self) -> &str {
        &self.url
    }
}
