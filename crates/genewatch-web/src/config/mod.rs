//! Configuration loading for genewatch.
//! Reads genewatch.toml from the current directory or the path in the
//! GENEWATCH_CONFIG env var. Every field has a default, so a missing file
//! just means a default configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use genewatch_common::{GenewatchError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub genes: GenesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_cache_timeout")]
    pub cache_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_feed_url() -> String {
    "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml".to_string()
}
fn default_cache_timeout()   -> u64    { 900 }
fn default_request_timeout() -> u64    { 30 }
fn default_user_agent()      -> String { format!("genewatch/{}", env!("CARGO_PKG_VERSION")) }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            cache_timeout_secs: default_cache_timeout(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesConfig {
    /// JSON or YAML gene set; the built-in set is served when unset.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from genewatch.toml.
    /// Checks GENEWATCH_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("GENEWATCH_CONFIG")
            .unwrap_or_else(|_| "genewatch.toml".to_string());

        if !Path::new(&path).exists() {
            info!(path = %path, "Config file not found; using defaults");
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GenewatchError::Config("server.port must be non-zero".into()));
        }
        if self.feed.url.trim().is_empty() {
            return Err(GenewatchError::Config("feed.url must not be empty".into()));
        }
        if self.feed.request_timeout_secs == 0 {
            return Err(GenewatchError::Config("feed.request_timeout_secs must be non-zero".into()));
        }
        Ok(())
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            GenewatchError::Config(format!("server.host {:?} is not an IP address", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
