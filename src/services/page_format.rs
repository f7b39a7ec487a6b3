//! On-disk page layout: the markup body, a newline, the separator token, a
//! newline, then the metadata as JSON.
//!
//! The separator is not escaped inside the content. A body holding a line
//! equal to the separator is cut short at that line when read back, or fails
//! to load when the text after it is not a JSON object.

use crate::errors::{Result, WikiError};
use crate::types::{Metadata, Page};

/// Split raw file text into content and metadata.
///
/// The metadata region starts at the first newline followed by `separator`.
/// Every separator occurrence is removed from that region before the rest is
/// parsed as a JSON object. Without a separator the whole text is content
/// and the metadata is empty. A byte-order mark is not special here; the
/// file reader drops it before parsing.
pub fn parse_page(raw: &str, separator: &str) -> Result<Page> {
    let marker = format!("\n{separator}");

    let Some(at) = raw.find(&marker) else {
        return Ok(Page::new(raw, Metadata::new()));
    };

    let region = raw[at..].replace(separator, "");
    let metadata: Metadata =
        serde_json::from_str(&region).map_err(|source| WikiError::MetadataParse { source })?;

    Ok(Page::new(&raw[..at], metadata))
}

/// Join content and metadata into file text. The byte-order mark is left to
/// the writer.
pub fn serialize_page(content: &str, metadata: &Metadata, separator: &str) -> Result<String> {
    let json =
        serde_json::to_string(metadata).map_err(|source| WikiError::Serialize { source })?;
    Ok(format!("{content}\n{separator}\n{json}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEPARATOR;
    use serde_json::json;

    fn metadata(value: serde_json::Value) -> Metadata {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_serialize_layout() {
        let meta = metadata(json!({ "tags": ["a"] }));
        let text = serialize_page("body", &meta, DEFAULT_SEPARATOR).unwrap();
        assert_eq!(text, format!("body\n{DEFAULT_SEPARATOR}\n{{\"tags\":[\"a\"]}}"));
    }

    #[test]
    fn test_round_trip() {
        let meta = metadata(json!({
            "title": "Main page",
            "tags": ["wiki", "مرحبا"],
            "nested": { "rev": 3, "draft": false, "score": null }
        }));
        for content in ["", "one line", "# Title\n\n**bold**\r\n", "trailing\n\n", "----"] {
            let text = serialize_page(content, &meta, DEFAULT_SEPARATOR).unwrap();
            let page = parse_page(&text, DEFAULT_SEPARATOR).unwrap();
            assert_eq!(page.content, content);
            assert_eq!(page.metadata, meta);
        }
    }

    #[test]
    fn test_parse_without_separator_keeps_everything() {
        let page = parse_page("just text\nno metadata", DEFAULT_SEPARATOR).unwrap();
        assert_eq!(page.content, "just text\nno metadata");
        assert!(page.metadata.is_empty());
    }

    #[test]
    fn test_round_trip_keeps_leading_bom_in_content() {
        let meta = metadata(json!({ "k": 1 }));
        for content in ["\u{feff}starts with bom", "\u{feff}"] {
            let text = serialize_page(content, &meta, DEFAULT_SEPARATOR).unwrap();
            let page = parse_page(&text, DEFAULT_SEPARATOR).unwrap();
            assert_eq!(page.content, content);
            assert_eq!(page.metadata, meta);
        }

        let page = parse_page("\u{feff}no metadata", DEFAULT_SEPARATOR).unwrap();
        assert_eq!(page.content, "\u{feff}no metadata");
    }

    #[test]
    fn test_parse_uses_first_separator() {
        let text = format!("a\n{sep}\nb\n{sep}\n{{}}", sep = "@@");
        let err = parse_page(&text, "@@").unwrap_err();
        assert!(matches!(err, WikiError::MetadataParse { .. }));

        let text = format!("a\n{sep}\n{{}}\n{sep}", sep = "@@");
        let page = parse_page(&text, "@@").unwrap();
        assert_eq!(page.content, "a");
        assert!(page.metadata.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_metadata() {
        for tail in ["not json", "", "[1, 2]", "\"text\""] {
            let text = format!("body\n{DEFAULT_SEPARATOR}\n{tail}");
            let err = parse_page(&text, DEFAULT_SEPARATOR).unwrap_err();
            assert!(matches!(err, WikiError::MetadataParse { .. }), "tail {tail:?}");
        }
    }

    #[test]
    fn test_separator_line_in_content_breaks_round_trip() {
        let content = format!("before\n{DEFAULT_SEPARATOR}\nafter");
        let text = serialize_page(&content, &Metadata::new(), DEFAULT_SEPARATOR).unwrap();
        let err = parse_page(&text, DEFAULT_SEPARATOR).unwrap_err();
        assert!(matches!(err, WikiError::MetadataParse { .. }));
    }
}
