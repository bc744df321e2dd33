//! Image upload response handling.
//!
//! The backend has shipped several envelope shapes for the upload endpoint.
//! Rather than asserting one canonical shape, the resolver probes a fixed,
//! ordered list of known URL locations and takes the first string hit.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::{Result, RichdownError};

type Probe = fn(&Value) -> Option<&str>;

/// Known URL locations in upload responses, in probing order.
static PROBES: Lazy<IndexMap<&'static str, Probe>> = Lazy::new(|| {
    let mut probes: IndexMap<&'static str, Probe> = IndexMap::new();
    probes.insert("data.successUrls[0]", |value| {
        value.get("data")?.get("successUrls")?.get(0)?.as_str()
    });
    probes.insert("data", |value| value.get("data")?.as_str());
    probes.insert("data.url", |value| value.get("data")?.get("url")?.as_str());
    probes.insert("data.imageUrl", |value| {
        value.get("data")?.get("imageUrl")?.as_str()
    });
    probes.insert("url", |value| value.get("url")?.as_str());
    probes.insert("imageUrl", |value| value.get("imageUrl")?.as_str());
    probes
});

/// Extract the uploaded image URL from a backend response envelope.
///
/// A location holding a non-string value falls through to the next probe;
/// empty strings are skipped too.
pub fn resolve_image_url(response: &Value) -> Result<String> {
    for probe in PROBES.values() {
        if let Some(url) = probe(response) {
            if !url.is_empty() {
                return Ok(url.to_string());
            }
        }
    }
    Err(RichdownError::MissingImageUrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_urls_shape() {
        let response = json!({ "data": { "successUrls": ["https://cdn/img.png"] } });
        assert_eq!(resolve_image_url(&response).unwrap(), "https://cdn/img.png");
    }

    #[test]
    fn test_bare_data_string_shape() {
        let response = json!({ "data": "https://cdn/a.png" });
        assert_eq!(resolve_image_url(&response).unwrap(), "https://cdn/a.png");
    }

    #[test]
    fn test_nested_url_shapes() {
        let by_url = json!({ "data": { "url": "u1" } });
        let by_image_url = json!({ "data": { "imageUrl": "u2" } });
        assert_eq!(resolve_image_url(&by_url).unwrap(), "u1");
        assert_eq!(resolve_image_url(&by_image_url).unwrap(), "u2");
    }

    #[test]
    fn test_top_level_shapes() {
        let by_url = json!({ "url": "u1" });
        let by_image_url = json!({ "imageUrl": "u2" });
        assert_eq!(resolve_image_url(&by_url).unwrap(), "u1");
        assert_eq!(resolve_image_url(&by_image_url).unwrap(), "u2");
    }

    #[test]
    fn test_probe_order() {
        let response = json!({
            "data": { "successUrls": ["first"], "url": "second" },
            "url": "third",
        });
        assert_eq!(resolve_image_url(&response).unwrap(), "first");
    }

    #[test]
    fn test_non_string_hit_falls_through() {
        let response = json!({ "data": { "successUrls": [42], "url": "fallback" } });
        assert_eq!(resolve_image_url(&response).unwrap(), "fallback");
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let response = json!({ "data": "", "url": "real" });
        assert_eq!(resolve_image_url(&response).unwrap(), "real");
    }

    #[test]
    fn test_missing_url_errors() {
        let response = json!({ "message": "created" });
        assert!(matches!(
            resolve_image_url(&response),
            Err(RichdownError::MissingImageUrl)
        ));
    }
}
