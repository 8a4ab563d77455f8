use serde::{Deserialize, Serialize};

/// Byline used when an item carries no Dublin Core creator.
pub const UNKNOWN_AUTHOR: &str = "By Unknown";

/// One `<item>` of an RSS channel, flattened for the web client.
/// Missing elements serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Raw `pubDate` text, RFC 822 in practice.
    pub published: Option<String>,
    /// `url` of the first `media:content` element.
    pub image: Option<String>,
    pub author: Option<String>,
}
