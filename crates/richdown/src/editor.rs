//! Per-line rendering for the editor's overlay.
//!
//! Unlike the display renderer, markers stay visible: each source line maps
//! to one styled `<div>` so the overlay lines up with the textarea content.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::inline::escape_html;
use crate::render::HORIZONTAL_RULE;

static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

struct EditorLine {
    class_name: &'static str,
    html: String,
}

/// Render Markdown as one styled `<div>` per source line, markers included.
pub fn render_editor_overlay(markdown: &str) -> String {
    let normalized = markdown.replace("\r\n", "\n");
    normalized
        .split('\n')
        .map(editor_line)
        .map(|line| format!(r#"<div class="{}">{}</div>"#, line.class_name, line.html))
        .collect()
}

fn editor_line(line: &str) -> EditorLine {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return EditorLine {
            class_name: "md-editor-line",
            html: "<br />".to_string(),
        };
    }

    if HORIZONTAL_RULE.is_match(trimmed) {
        return EditorLine {
            class_name: "md-editor-line md-editor-hr",
            html: trimmed.to_string(),
        };
    }

    let class_name = if trimmed.starts_with("### ") {
        "md-editor-line md-editor-h3"
    } else if trimmed.starts_with("## ") {
        "md-editor-line md-editor-h2"
    } else if trimmed.starts_with("# ") {
        "md-editor-line md-editor-h1"
    } else {
        "md-editor-line"
    };

    EditorLine {
        class_name,
        html: format_editor_inline(line),
    }
}

/// Inline formatting for the overlay: markers are kept inside the styled
/// spans so the text keeps its source width.
fn format_editor_inline(value: &str) -> String {
    let escaped = escape_html(value);

    let with_strong = STRONG.replace_all(&escaped, |caps: &Captures| {
        format!(r#"<span class="md-editor-bold">**{}**</span>"#, &caps[1])
    });

    let with_emphasis = EMPHASIS.replace_all(&with_strong, |caps: &Captures| {
        format!(r#"<span class="md-editor-italic">*{}*</span>"#, &caps[1])
    });

    CODE_SPAN
        .replace_all(&with_emphasis, |caps: &Captures| {
            format!(r#"<span class="md-editor-code">`{}`</span>"#, &caps[1])
        })
        .into_owned()
}
