//! Post thumbnail helpers.
//!
//! Posts use their first content image as the thumbnail; when a post has no
//! image the write page offers a set of generated SVG defaults.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::inline::escape_html;

/// Markdown image syntax; the capture is the URL.
static IMAGE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap());

/// Bytes kept literal by `encodeURIComponent`.
const DATA_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SNIPPET_MAX_CHARS: usize = 16;

/// Collect the distinct image URLs referenced by a Markdown document, in
/// order of first appearance.
pub fn extract_image_urls(markdown: &str) -> Vec<String> {
    let mut urls: IndexSet<String> = IndexSet::new();
    for caps in IMAGE_URL.captures_iter(markdown) {
        let url = caps[1].trim();
        if !url.is_empty() {
            urls.insert(url.to_string());
        }
    }
    urls.into_iter().collect()
}

/// A generated default thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub id: String,
    pub url: String,
    pub label: String,
}

struct Variant {
    bg: &'static str,
    accent: &'static str,
}

const VARIANTS: &[Variant] = &[
    Variant {
        bg: "#FDE68A",
        accent: "#F59E0B",
    },
    Variant {
        bg: "#BFDBFE",
        accent: "#60A5FA",
    },
    Variant {
        bg: "#E9D5FF",
        accent: "#C084FC",
    },
];

/// Build the default thumbnail variants offered when a post has no image.
pub fn build_default_thumbnails(title: &str) -> Vec<Thumbnail> {
    let snippet = escape_html(&title_snippet(title));

    VARIANTS
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let svg = format!(
                r#"
<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630" viewBox="0 0 1200 630">
  <rect width="1200" height="630" fill="{bg}" />
  <circle cx="{left}" cy="140" r="120" fill="{accent}" opacity="0.28" />
  <circle cx="{right}" cy="520" r="180" fill="{accent}" opacity="0.22" />
  <rect x="120" y="190" rx="28" ry="28" width="960" height="260" fill="white" opacity="0.82" />
  <text x="160" y="330" font-size="64" font-family="Arial, Helvetica, sans-serif" font-weight="700" fill="#111827">
    {snippet}
  </text>
</svg>"#,
                bg = variant.bg,
                accent = variant.accent,
                left = 200 + index * 140,
                right = 1030 - index * 80,
                snippet = snippet,
            );

            Thumbnail {
                id: format!("default-{}", index + 1),
                url: svg_data_url(&svg),
                label: format!("Default thumbnail {}", index + 1),
            }
        })
        .collect()
}

fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;utf8,{}", utf8_percent_encode(svg, DATA_URL))
}

fn title_snippet(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return "My Post".to_string();
    }

    let mut chars = trimmed.chars();
    let head: String = chars.by_ref().take(SNIPPET_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        trimmed.to_string()
    }
}
