//! GIPHY wire format and response parsing.
//!
//! Only the fields this crate consumes are modelled; everything else in
//! the provider payload is ignored. Parsing is a separate function so it
//! can be tested against fixture JSON without a network.

use crate::types::{StickerResult, GIPHY_HOMEPAGE};
use serde::Deserialize;

/// Top-level GIPHY search response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    /// Result entries; absent or null is treated as empty.
    #[serde(default)]
    pub data: Vec<StickerEntry>,
}

/// A single entry in the GIPHY `data` array.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StickerEntry {
    #[serde(default)]
    pub images: ImageVariants,
    #[serde(default)]
    pub source_post_url: Option<String>,
}

/// Nested image renditions; each variant may be absent.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageVariants {
    #[serde(default)]
    pub original: Option<ImageAsset>,
    #[serde(default)]
    pub preview_gif: Option<ImageAsset>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageAsset {
    #[serde(default)]
    pub url: Option<String>,
}

/// Extract up to `limit` results from a parsed response.
///
/// Missing image URLs default to empty strings. The attribution URL
/// defaults to the GIPHY homepage only when the field is absent; a
/// present-but-empty value passes through unchanged.
pub(crate) fn parse_results(response: SearchResponse, limit: usize) -> Vec<StickerResult> {
    response
        .data
        .into_iter()
        .take(limit)
        .map(|entry| StickerResult {
            url: entry
                .images
                .original
                .and_then(|asset| asset.url)
                .unwrap_or_default(),
            preview: entry
                .images
                .preview_gif
                .and_then(|asset| asset.url)
                .unwrap_or_default(),
            source: entry
                .source_post_url
                .unwrap_or_else(|| GIPHY_HOMEPAGE.to_owned()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(json: &str) -> SearchResponse {
        serde_json::from_str(json).expect("fixture parses")
    }

    #[test]
    fn parses_full_entry() {
        let response = fixture(
            r#"{"data": [{
                "images": {
                    "original": {"url": "https://media.giphy.com/a/original.gif"},
                    "preview_gif": {"url": "https://media.giphy.com/a/preview.gif"}
                },
                "source_post_url": "https://giphy.com/posts/a"
            }]}"#,
        );
        let results = parse_results(response, 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://media.giphy.com/a/original.gif");
        assert_eq!(results[0].preview, "https://media.giphy.com/a/preview.gif");
        assert_eq!(results[0].source, "https://giphy.com/posts/a");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let response = fixture(r#"{"data": [{}]}"#);
        let results = parse_results(response, 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "");
        assert_eq!(results[0].preview, "");
        assert_eq!(results[0].source, GIPHY_HOMEPAGE);
    }

    #[test]
    fn empty_source_passes_through() {
        // Only an absent field gets the homepage default.
        let response = fixture(r#"{"data": [{"source_post_url": ""}]}"#);
        let results = parse_results(response, 1);
        assert_eq!(results[0].source, "");
    }

    #[test]
    fn truncates_to_limit() {
        let response = fixture(
            r#"{"data": [
                {"source_post_url": "https://giphy.com/posts/1"},
                {"source_post_url": "https://giphy.com/posts/2"},
                {"source_post_url": "https://giphy.com/posts/3"},
                {"source_post_url": "https://giphy.com/posts/4"}
            ]}"#,
        );
        let results = parse_results(response, 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source, "https://giphy.com/posts/1");
        assert_eq!(results[1].source, "https://giphy.com/posts/2");
    }

    #[test]
    fn missing_data_array_is_empty() {
        let response = fixture(r#"{"meta": {"status": 200}}"#);
        assert!(parse_results(response, 3).is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let response = fixture(
            r#"{"data": [{
                "type": "sticker",
                "id": "abc123",
                "rating": "g",
                "images": {"original": {"url": "https://media.giphy.com/x.gif", "width": "480"}}
            }]}"#,
        );
        let results = parse_results(response, 3);
        assert_eq!(results[0].url, "https://media.giphy.com/x.gif");
    }
}
