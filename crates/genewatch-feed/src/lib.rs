//! genewatch-feed — News feed proxy: HTTP source, TTL cache and RSS parsing.

pub mod models;
pub mod source;
pub mod cache;
pub mod parser;

pub use cache::FeedCache;
pub use models::Article;
pub use parser::parse_feed;
pub use source::{FeedSource, HttpFeedSource};
