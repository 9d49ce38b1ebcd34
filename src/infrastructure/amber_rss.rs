// Minimal AMBER RSS item extraction
use crate::domain::alerts::AmberItem;

const DEFAULT_TITLE: &str = "AMBER Alert";

/// Text between the first `<tag>` and the first `</tag>` in `chunk`.
fn tag_text<'a>(chunk: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = chunk.find(&open)? + open.len();
    let end = chunk.find(&close)?;
    chunk.get(start..end).map(str::trim)
}

/// Pull title, link and description out of every `<item>`. The feed is
/// scanned textually; malformed items still yield an entry with defaults.
pub fn parse_amber_items(feed: &str) -> Vec<AmberItem> {
    feed.split("<item>")
        .skip(1)
        .map(|chunk| AmberItem {
            title: Some(tag_text(chunk, "title").unwrap_or(DEFAULT_TITLE).to_string()),
            link: Some(tag_text(chunk, "link").unwrap_or_default().to_string()),
            description: Some(tag_text(chunk, "description").unwrap_or_default().to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0"?>
<rss><channel><title>NCMEC AMBER Alerts</title>
<item>
  <title> AMBER Alert: Jane Doe (TX) </title>
  <link>https://www.missingkids.org/poster/NCMC/1</link>
  <description>Last seen in Austin</description>
</item>
<item>
  <link>https://www.missingkids.org/poster/NCMC/2</link>
</item>
</channel></rss>"#;

    #[test]
    fn test_parse_amber_items() {
        let items = parse_amber_items(FEED);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title.as_deref(), Some("AMBER Alert: Jane Doe (TX)"));
        assert_eq!(
            items[0].link.as_deref(),
            Some("https://www.missingkids.org/poster/NCMC/1")
        );
        assert_eq!(items[0].description.as_deref(), Some("Last seen in Austin"));

        assert_eq!(items[1].title.as_deref(), Some("AMBER Alert"));
        assert_eq!(items[1].description.as_deref(), Some(""));
    }

    #[test]
    fn test_feed_without_items() {
        assert!(parse_amber_items("<rss><channel></channel></rss>").is_empty());
        assert!(parse_amber_items("").is_empty());
    }

    #[test]
    fn test_reversed_tags_do_not_panic() {
        let items = parse_amber_items("<item></title>x<title>");
        assert_eq!(items[0].title.as_deref(), Some("AMBER Alert"));
    }
}
