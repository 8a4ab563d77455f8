//! RSS 2.0 parsing.
//!
//! Only direct children of `<item>` are read:
//!   title, description, link, pubDate    (no namespace)
//!   media:content @url                   (http://search.yahoo.com/mrss/)
//!   dc:creator                           (http://purl.org/dc/elements/1.1/)

use genewatch_common::{GenewatchError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::debug;

use crate::models::{Article, UNKNOWN_AUTHOR};

const MEDIA_NS: &[u8] = b"http://search.yahoo.com/mrss/";
const DC_NS: &[u8] = b"http://purl.org/dc/elements/1.1/";

/// Item children we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Child {
    Title,
    Description,
    Link,
    Published,
    MediaContent,
    Creator,
}

fn classify(ns: &ResolveResult, local: &[u8]) -> Option<Child> {
    match ns {
        ResolveResult::Unbound => match local {
            b"title"       => Some(Child::Title),
            b"description" => Some(Child::Description),
            b"link"        => Some(Child::Link),
            b"pubDate"     => Some(Child::Published),
            _ => None,
        },
        ResolveResult::Bound(Namespace(uri)) if *uri == MEDIA_NS && local == b"content" => {
            Some(Child::MediaContent)
        }
        ResolveResult::Bound(Namespace(uri)) if *uri == DC_NS && local == b"creator" => {
            Some(Child::Creator)
        }
        _ => None,
    }
}

/// Per-item parse state.
#[derive(Default)]
struct ItemState {
    article: Article,
    /// Element depth below `<item>`; 1 means a direct child is open.
    depth: usize,
    field: Option<Child>,
    text: String,
    /// Set once an element opens inside the field; later text is tail text.
    text_done: bool,
    media_seen: bool,
    creator_seen: bool,
}

impl ItemState {
    /// A direct child opened (or appeared as an empty element).
    fn open_child(&mut self, child: Option<Child>, e: &BytesStart<'_>) -> Result<()> {
        match child {
            Some(Child::MediaContent) => {
                // first media:content wins, even if it has no url
                if !self.media_seen {
                    self.media_seen = true;
                    self.article.image = attribute(e, "url")?;
                }
            }
            Some(Child::Creator) => self.creator_seen = true,
            _ => {}
        }
        self.field = child;
        self.text.clear();
        self.text_done = false;
        Ok(())
    }

    /// Text inside the open direct child, up to its first nested element.
    fn push_text(&mut self, text: &str) {
        if self.depth == 1 && self.field.is_some() && !self.text_done {
            self.text.push_str(text);
        }
    }

    /// The open direct child closed; store its collected text, trimmed once.
    fn close_child(&mut self) {
        let Some(field) = self.field.take() else { return };
        let text = self.text.trim().to_string();
        self.text.clear();
        if text.is_empty() {
            return;
        }
        let a = &mut self.article;
        match field {
            Child::Title        => set_once(&mut a.title, text),
            Child::Description  => set_once(&mut a.description, text),
            Child::Link         => set_once(&mut a.link, text),
            Child::Published    => set_once(&mut a.published, text),
            Child::Creator      => set_once(&mut a.author, text),
            Child::MediaContent => {}
        }
    }

    fn finish(mut self) -> Article {
        if !self.creator_seen {
            self.article.author = Some(UNKNOWN_AUTHOR.to_string());
        }
        self.article
    }
}

/// Repeated children keep the first value.
fn set_once(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| GenewatchError::Xml(err.to_string()))?;
    attr.map(|a| {
        a.unescape_value()
            .map(|v| v.into_owned())
            .map_err(|err| GenewatchError::Xml(err.to_string()))
    })
    .transpose()
}

fn xml_error(msg: impl Into<String>) -> GenewatchError {
    GenewatchError::Xml(format!("Malformed feed: {}", msg.into()))
}

/// Parse an RSS document into articles, in document order.
///
/// The document must have exactly one root element and every element must
/// be closed; truncated bodies, HTML error pages and plain text are errors.
pub fn parse_feed(xml: &str) -> Result<Vec<Article>> {
    let mut reader = NsReader::from_str(xml);

    let mut articles = Vec::new();
    let mut item: Option<ItemState> = None;
    // document-level structure
    let mut open_elements = 0usize;
    let mut root_seen = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_resolved_event_into(&mut buf) {
            Ok((ns, Event::Start(e))) => {
                if open_elements == 0 && root_seen {
                    return Err(xml_error("more than one root element"));
                }
                root_seen = true;
                open_elements += 1;

                let child = classify(&ns, e.local_name().as_ref());
                match item.as_mut() {
                    Some(state) => {
                        state.depth += 1;
                        match state.depth {
                            1 => state.open_child(child, &e)?,
                            2 => state.text_done = true,
                            _ => {}
                        }
                    }
                    None => {
                        if matches!(ns, ResolveResult::Unbound) && e.local_name().as_ref() == b"item" {
                            item = Some(ItemState::default());
                        }
                    }
                }
            }
            Ok((ns, Event::Empty(e))) => {
                if open_elements == 0 && root_seen {
                    return Err(xml_error("more than one root element"));
                }
                root_seen = true;

                match item.as_mut() {
                    Some(state) => match state.depth {
                        0 => {
                            let child = classify(&ns, e.local_name().as_ref());
                            state.open_child(child, &e)?;
                            state.close_child();
                        }
                        1 => state.text_done = true,
                        _ => {}
                    },
                    None => {
                        // <item/> still counts as an (empty) article
                        if matches!(ns, ResolveResult::Unbound) && e.local_name().as_ref() == b"item" {
                            articles.push(ItemState::default().finish());
                        }
                    }
                }
            }
            Ok((_, Event::Text(e))) => {
                let text = e.unescape().map_err(|err| xml_error(err.to_string()))?;
                if open_elements == 0 {
                    if !text.trim().is_empty() {
                        return Err(xml_error("text outside the root element"));
                    }
                } else if let Some(state) = item.as_mut() {
                    state.push_text(&text);
                }
            }
            Ok((_, Event::CData(e))) => {
                if open_elements == 0 {
                    return Err(xml_error("CDATA outside the root element"));
                }
                if let Some(state) = item.as_mut() {
                    state.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Ok((_, Event::End(_))) => {
                open_elements = open_elements.saturating_sub(1);

                let item_closed = match item.as_mut() {
                    Some(state) if state.depth == 0 => true,
                    Some(state) => {
                        if state.depth == 1 {
                            state.close_child();
                        }
                        state.depth -= 1;
                        false
                    }
                    None => false,
                };
                if item_closed {
                    if let Some(done) = item.take() {
                        articles.push(done.finish());
                    }
                }
            }
            Ok((_, Event::Eof)) => {
                if !root_seen {
                    return Err(xml_error("no root element"));
                }
                if open_elements > 0 {
                    return Err(xml_error(format!(
                        "document ended with {} unclosed element(s)",
                        open_elements
                    )));
                }
                break;
            }
            Err(e) => return Err(xml_error(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    debug!(n_articles = articles.len(), "Parsed feed");
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:dc="http://purl.org/dc/elements/1.1/"
     xmlns:media="http://search.yahoo.com/mrss/"
     xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>NYT &gt; Technology</title>
    <link>https://www.nytimes.com/section/technology</link>
    <atom:link href="https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml" rel="self"/>
    <item>
      <title>Chips &amp; Policy</title>
      <link>https://www.nytimes.com/2024/01/01/technology/chips.html</link>
      <atom:link href="https://example.com/ignored" rel="standout"/>
      <description><![CDATA[Export rules <b>tighten</b>.]]></description>
      <dc:creator>Jane Doe</dc:creator>
      <pubDate>Mon, 01 Jan 2024 10:00:00 +0000</pubDate>
      <media:content height="1800" width="1800" medium="image" url="https://static01.nyt.com/images/chips.jpg">
        <media:credit>Photographer</media:credit>
      </media:content>
      <media:content medium="image" url="https://static01.nyt.com/images/second.jpg"/>
    </item>
    <item>
      <title>No Byline</title>
      <description>Short note.</description>
      <link>https://www.nytimes.com/2024/01/02/technology/note.html</link>
      <pubDate>Tue, 02 Jan 2024 10:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items_in_order() {
        let articles = parse_feed(SAMPLE).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Chips & Policy"));
        assert_eq!(articles[1].title.as_deref(), Some("No Byline"));
    }

    #[test]
    fn test_parse_full_item() {
        let a = &parse_feed(SAMPLE).unwrap()[0];
        assert_eq!(a.link.as_deref(), Some("https://www.nytimes.com/2024/01/01/technology/chips.html"));
        assert_eq!(a.description.as_deref(), Some("Export rules <b>tighten</b>."));
        assert_eq!(a.published.as_deref(), Some("Mon, 01 Jan 2024 10:00:00 +0000"));
        assert_eq!(a.image.as_deref(), Some("https://static01.nyt.com/images/chips.jpg"));
        assert_eq!(a.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_missing_creator_and_image() {
        let a = &parse_feed(SAMPLE).unwrap()[1];
        assert_eq!(a.author.as_deref(), Some(UNKNOWN_AUTHOR));
        assert_eq!(a.image, None);
    }

    #[test]
    fn test_missing_elements_are_none() {
        let xml = "<rss><channel><item><title>Only title</title></item></channel></rss>";
        let a = &parse_feed(xml).unwrap()[0];
        assert_eq!(a.description, None);
        assert_eq!(a.link, None);
        assert_eq!(a.published, None);
    }

    #[test]
    fn test_empty_creator_gives_no_author() {
        let xml = r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><channel>
            <item><title>t</title><dc:creator/></item>
        </channel></rss>"#;
        let a = &parse_feed(xml).unwrap()[0];
        assert_eq!(a.author, None);
    }

    #[test]
    fn test_unprefixed_namespace_elements_ignored() {
        // a creator element outside the Dublin Core namespace is not a byline
        let xml = "<rss><channel><item><creator>Someone</creator></item></channel></rss>";
        let a = &parse_feed(xml).unwrap()[0];
        assert_eq!(a.author.as_deref(), Some(UNKNOWN_AUTHOR));
    }

    #[test]
    fn test_self_closing_item() {
        let articles = parse_feed("<rss><channel><item/></channel></rss>").unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, None);
        assert_eq!(articles[0].author.as_deref(), Some(UNKNOWN_AUTHOR));
    }

    #[test]
    fn test_channel_without_items() {
        let xml = "<rss><channel><title>Empty</title></channel></rss>";
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn test_text_and_cdata_segments_keep_spacing() {
        let xml = "<rss><channel><item>\
            <description>Hello <![CDATA[big]]> world</description>\
            <title>  Padded title\n  </title>\
            </item></channel></rss>";
        let a = &parse_feed(xml).unwrap()[0];
        assert_eq!(a.description.as_deref(), Some("Hello big world"));
        assert_eq!(a.title.as_deref(), Some("Padded title"));
    }

    #[test]
    fn test_text_after_nested_element_is_ignored() {
        let xml = "<rss><channel><item>\
            <title>A <b>bold</b> move</title>\
            <description>Line<br/>break</description>\
            </item></channel></rss>";
        let a = &parse_feed(xml).unwrap()[0];
        assert_eq!(a.title.as_deref(), Some("A"));
        assert_eq!(a.description.as_deref(), Some("Line"));
    }

    #[test]
    fn test_truncated_document_is_error() {
        let err = parse_feed("<rss><channel><item><title>Cut off</title>").unwrap_err();
        assert!(matches!(err, GenewatchError::Xml(_)));
    }

    #[test]
    fn test_unclosed_html_page_is_error() {
        let err = parse_feed("<html><body>Service Unavailable").unwrap_err();
        assert!(matches!(err, GenewatchError::Xml(_)));
    }

    #[test]
    fn test_plain_text_is_error() {
        assert!(matches!(parse_feed("not xml at all"), Err(GenewatchError::Xml(_))));
    }

    #[test]
    fn test_empty_body_is_error() {
        assert!(matches!(parse_feed(""), Err(GenewatchError::Xml(_))));
        assert!(matches!(parse_feed("  \n"), Err(GenewatchError::Xml(_))));
    }

    #[test]
    fn test_second_root_is_error() {
        assert!(matches!(parse_feed("<rss/><rss/>"), Err(GenewatchError::Xml(_))));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let err = parse_feed("<rss><channel><item><title>oops</channel></rss>").unwrap_err();
        assert!(matches!(err, GenewatchError::Xml(_)));
    }
}
