//! Line-oriented Markdown to HTML rendering.
//!
//! A single forward pass over the source lines with one line of lookahead.
//! The dialect has no block nesting, so no recursion is needed. All literal
//! text goes through HTML escaping before any tags are introduced.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::highlight::highlight_code;
use crate::inline::{escape_html, format_inline};
use crate::options::RenderOptions;

/// Separator row under a table header: dash cells with optional `:`
/// alignment colons, split on pipes, one optional pipe on each end. The
/// trailing-pipe form is what the serializer emits.
static TABLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").unwrap());

/// Horizontal rule: three or more repeated `-`, `*` or `_` and nothing else.
pub(crate) static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").unwrap());

/// Render Markdown to a sanitized HTML fragment.
pub fn markdown_to_html(markdown: &str, options: &RenderOptions) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let normalized = markdown.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut blocks: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let raw = lines[i];
        let line = raw.trim();

        // Pipe table: header line followed by a separator row.
        if line.contains('|') && i + 1 < lines.len() && is_table_separator(lines[i + 1].trim()) {
            let header = raw;
            let mut rows: Vec<&str> = Vec::new();
            i += 2;
            while i < lines.len() && lines[i].contains('|') {
                rows.push(lines[i]);
                i += 1;
            }
            blocks.push(render_table(header, &rows));
            continue;
        }

        if HORIZONTAL_RULE.is_match(line) {
            blocks.push(r#"<hr class="md-hr" />"#.to_string());
            i += 1;
            continue;
        }

        if line.is_empty() {
            if options.preserve_blank_lines {
                blocks.push("<br />".to_string());
            }
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("```") {
            let language = rest.trim();
            let mut code_lines: Vec<&str> = Vec::new();
            i += 1;
            while i < lines.len() && !lines[i].trim().starts_with("```") {
                code_lines.push(lines[i]);
                i += 1;
            }
            // Consume the closing fence; an unterminated fence runs to the
            // end of input.
            i += 1;
            blocks.push(render_code_block(&code_lines.join("\n"), language, options));
            continue;
        }

        if line.starts_with("- ") || line.starts_with("* ") {
            let mut items: Vec<String> = Vec::new();
            while i < lines.len() {
                let current = lines[i].trim();
                if !(current.starts_with("- ") || current.starts_with("* ")) {
                    break;
                }
                items.push(format!("<li>{}</li>", format_inline(&current[2..])));
                i += 1;
            }
            blocks.push(format!(r#"<ul class="md-list">{}</ul>"#, items.concat()));
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            blocks.push(render_heading(3, "### ", rest, options));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(render_heading(2, "## ", rest, options));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            blocks.push(render_heading(1, "# ", rest, options));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("> ") {
            blocks.push(format!(
                r#"<blockquote class="md-quote">{}</blockquote>"#,
                format_inline(rest)
            ));
            i += 1;
            continue;
        }

        // Paragraph: contiguous lines up to a blank line or another block
        // opener, joined with line breaks.
        let mut paragraph: Vec<String> = Vec::new();
        while i < lines.len() {
            let current = lines[i].trim();
            if current.is_empty() || opens_block(current) {
                break;
            }
            paragraph.push(format_inline(current));
            i += 1;
        }
        blocks.push(format!(
            r#"<p class="md-p">{}</p>"#,
            paragraph.join("<br />")
        ));
    }

    blocks.concat()
}

/// Render stored post content: blank lines preserved, highlighting on.
pub fn render_markdown(markdown: &str) -> String {
    markdown_to_html(
        markdown,
        &RenderOptions {
            highlight_syntax: true,
            ..RenderOptions::default()
        },
    )
}

fn is_table_separator(line: &str) -> bool {
    line.contains('|') && TABLE_SEPARATOR.is_match(line)
}

/// Lines that terminate a paragraph by opening another block.
fn opens_block(line: &str) -> bool {
    line.starts_with("# ")
        || line.starts_with("## ")
        || line.starts_with("### ")
        || line.starts_with("> ")
        || line.starts_with("- ")
        || line.starts_with("* ")
        || line.starts_with("```")
        || HORIZONTAL_RULE.is_match(line)
}

fn render_table(header: &str, rows: &[&str]) -> String {
    let thead: String = split_row(header)
        .iter()
        .map(|cell| format!("<th>{}</th>", format_inline(cell)))
        .collect();

    let tbody: String = rows
        .iter()
        .map(|row| {
            let cells: String = split_row(row)
                .iter()
                .map(|cell| format!("<td>{}</td>", format_inline(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        r#"<table class="md-table"><thead><tr>{thead}</tr></thead><tbody>{tbody}</tbody></table>"#
    )
}

/// Split a table row into trimmed cells, dropping one optional pipe on each
/// end.
fn split_row(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}

fn render_code_block(code: &str, language: &str, options: &RenderOptions) -> String {
    let escaped = escape_html(code);
    let highlighted = if options.highlight_syntax {
        highlight_code(&escaped, language).into_owned()
    } else {
        escaped
    };

    if language.is_empty() {
        format!(r#"<pre class="md-code"><code class="md-code-inner">{highlighted}</code></pre>"#)
    } else {
        let language = escape_html(language);
        format!(
            r#"<pre class="md-code"><code class="md-code-inner language-{language}" data-language="{language}">{highlighted}</code></pre>"#
        )
    }
}

fn render_heading(level: u8, marker: &str, text: &str, options: &RenderOptions) -> String {
    let prefix = if options.include_heading_prefix {
        format!(r#"<span class="md-heading-prefix">{marker}</span>"#)
    } else {
        String::new()
    };
    format!(
        r#"<h{level} class="md-h{level}">{prefix}{}</h{level}>"#,
        format_inline(text)
    )
}
