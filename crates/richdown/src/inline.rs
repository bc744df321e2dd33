//! Inline Markdown formatting.
//!
//! Literal text is HTML-escaped before any Markdown substitution runs, so
//! injected markup cannot survive rendering; the only unescaped tags in the
//! output are the ones introduced here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Escape HTML-significant characters.
pub(crate) fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Apply inline Markdown formatting to one line of text.
///
/// Images are substituted before links because image syntax is a superset
/// prefix of link syntax. Code spans are substituted before the emphasis
/// passes and their bodies parked in a side list, so emphasis markers inside
/// code keep their literal meaning.
pub(crate) fn format_inline(value: &str) -> String {
    let escaped = escape_html(value);

    let with_images = IMAGE.replace_all(&escaped, |caps: &Captures| {
        format!(
            r#"<img src="{}" alt="{}" class="md-image" loading="lazy" />"#,
            &caps[2], &caps[1]
        )
    });

    let with_links = LINK.replace_all(&with_images, |caps: &Captures| {
        format!(r#"<a href="{}" class="md-link">{}</a>"#, &caps[2], &caps[1])
    });

    let mut code_spans: Vec<String> = Vec::new();
    let with_code = CODE_SPAN.replace_all(&with_links, |caps: &Captures| {
        code_spans.push(format!(
            r#"<code class="md-inline-code">{}</code>"#,
            &caps[1]
        ));
        format!("\u{0}{}\u{0}", code_spans.len() - 1)
    });

    let with_strong = STRONG.replace_all(&with_code, |caps: &Captures| {
        format!("<strong>{}</strong>", &caps[1])
    });

    let with_emphasis = EMPHASIS.replace_all(&with_strong, |caps: &Captures| {
        format!("<em>{}</em>", &caps[1])
    });

    let mut text = with_emphasis.into_owned();
    for (index, span) in code_spans.iter().enumerate() {
        text = text.replace(&format!("\u{0}{index}\u{0}"), span);
    }
    text
}
