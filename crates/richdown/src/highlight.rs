//! Keyword highlighting for fenced code blocks.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Languages eligible for keyword highlighting.
const HIGHLIGHT_LANGUAGES: &[&str] = &["js", "ts", "javascript", "typescript"];

/// Keywords wrapped in highlight spans, matched as whole words.
static KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(const|let|var|function|return|import|export|default|type|interface|class|extends|implements|async|await|if|else|for|while|switch|case|break|continue|new|try|catch|throw)\b",
    )
    .unwrap()
});

/// Wrap known keywords in `<span class="token keyword">`.
///
/// `code` is expected to be HTML-escaped already. Languages outside the
/// JavaScript family are returned unchanged.
pub fn highlight_code<'a>(code: &'a str, language: &str) -> Cow<'a, str> {
    let language = language.to_lowercase();
    if !HIGHLIGHT_LANGUAGES.contains(&language.as_str()) {
        return Cow::Borrowed(code);
    }
    KEYWORDS.replace_all(code, r#"<span class="token keyword">$1</span>"#)
}
