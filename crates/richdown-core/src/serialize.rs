//! Rich document serialization
//!
//! Converts a rich document tree into Markdown text.

use crate::ast::{Block, Inline, ListItem, Row, Slice};
use crate::options::SerializeOptions;

/// Serialize a document root to Markdown.
///
/// Sibling blocks are joined with the configured paragraph separator and the
/// result carries no leading or trailing whitespace. A non-`Document` root is
/// treated as a one-block document. Serialization never fails: unsupported
/// nodes degrade to their inline text or are dropped.
pub fn serialize_document(root: &Block, options: &SerializeOptions) -> String {
    let blocks = match root {
        Block::Document(children) => children.as_slice(),
        other => std::slice::from_ref(other),
    };
    serialize_blocks(blocks, &options.paragraph_separator)
        .trim()
        .to_string()
}

/// Serialize a selection slice to Markdown, trimmed.
pub fn serialize_slice(slice: &Slice, options: &SerializeOptions) -> String {
    serialize_blocks(&slice.content, &options.paragraph_separator)
        .trim()
        .to_string()
}

/// Serialize sibling blocks, dropping the ones that produce no output.
fn serialize_blocks(blocks: &[Block], separator: &str) -> String {
    let parts: Vec<String> = blocks.iter().filter_map(serialize_block).collect();
    parts.join(separator)
}

fn serialize_block(block: &Block) -> Option<String> {
    match block {
        Block::Document(children) => non_empty(serialize_blocks(children, "\n")),

        Block::Paragraph(inlines) => non_empty(serialize_inlines(inlines).trim_end().to_string()),

        Block::Heading { level, content } => {
            let text = serialize_inlines(content).trim().to_string();
            Some(format!("{} {}", "#".repeat(*level as usize), text))
        }

        Block::Blockquote(children) => {
            let inner = serialize_blocks(children, "\n");
            if inner.is_empty() {
                return None;
            }
            let quoted: Vec<String> = inner.lines().map(|line| format!("> {line}")).collect();
            Some(quoted.join("\n"))
        }

        Block::BulletList(items) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(serialize_list_item)
                .map(|text| format!("- {text}"))
                .collect();
            non_empty(lines.join("\n"))
        }

        Block::OrderedList { start, items } => {
            let mut lines = Vec::new();
            for (offset, item) in items.iter().enumerate() {
                if let Some(text) = serialize_list_item(item) {
                    lines.push(format!("{}. {text}", start + offset as u32));
                }
            }
            non_empty(lines.join("\n"))
        }

        Block::CodeBlock { language, code } => {
            // Fences preserve literal content; the code is not escaped.
            let language = language.as_deref().unwrap_or("");
            Some(format!("```{language}\n{code}\n```"))
        }

        Block::HorizontalRule => Some("---".to_string()),

        Block::Table(rows) => serialize_table(rows),

        Block::Unknown { textblock, content } => {
            if *textblock {
                non_empty(serialize_inlines(content).trim_end().to_string())
            } else {
                None
            }
        }
    }
}

/// Only the first paragraph carries the item text; nested blocks beyond it
/// are a known lossy simplification.
fn serialize_list_item(item: &ListItem) -> Option<String> {
    let first = item.content.iter().find_map(|block| match block {
        Block::Paragraph(inlines) => Some(inlines),
        _ => None,
    })?;
    non_empty(serialize_inlines(first).trim().to_string())
}

fn serialize_table(rows: &[Row]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut lines: Vec<String> = rows.iter().map(serialize_row).collect();

    // A table with a body gets a separator row matching the header's
    // column count.
    if lines.len() >= 2 {
        let columns = rows[0].cells.len().max(1);
        let separator = vec!["---"; columns].join(" | ");
        lines.insert(1, format!("| {separator} |"));
    }

    Some(lines.join("\n"))
}

fn serialize_row(row: &Row) -> String {
    let cells: Vec<String> = row
        .cells
        .iter()
        .map(|cell| serialize_inlines(&cell.content).trim().to_string())
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn serialize_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        serialize_inline(inline, &mut out);
    }
    out
}

fn serialize_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text { value, marks } => {
            if marks.code {
                // Code wins; emphasis marks are not applied inside code spans.
                out.push('`');
                out.push_str(value);
                out.push('`');
            } else if marks.bold && marks.italic {
                out.push_str("***");
                out.push_str(value);
                out.push_str("***");
            } else if marks.bold {
                out.push_str("**");
                out.push_str(value);
                out.push_str("**");
            } else if marks.italic {
                out.push('*');
                out.push_str(value);
                out.push('*');
            } else {
                out.push_str(value);
            }
        }

        Inline::HardBreak => out.push('\n'),
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Cell, Marks};

    fn default_options() -> SerializeOptions {
        SerializeOptions::default()
    }

    fn doc(blocks: Vec<Block>) -> Block {
        Block::Document(blocks)
    }

    #[test]
    fn test_empty_document() {
        let result = serialize_document(&doc(vec![]), &default_options());
        assert_eq!(result, "");
    }

    #[test]
    fn test_paragraph() {
        let block = doc(vec![Block::Paragraph(vec![Inline::text("Hello World")])]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_paragraphs_joined_with_blank_line() {
        let block = doc(vec![
            Block::Paragraph(vec![Inline::text("one")]),
            Block::Paragraph(vec![Inline::text("two")]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "one\n\ntwo");
    }

    #[test]
    fn test_single_line_separator() {
        let block = doc(vec![
            Block::Paragraph(vec![Inline::text("one")]),
            Block::Paragraph(vec![Inline::text("two")]),
        ]);
        let result = serialize_document(&block, &SerializeOptions::single_line());
        assert_eq!(result, "one\ntwo");
    }

    #[test]
    fn test_empty_paragraph_dropped() {
        let block = doc(vec![
            Block::Paragraph(vec![Inline::text("a")]),
            Block::Paragraph(vec![]),
            Block::Paragraph(vec![Inline::text("b")]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "a\n\nb");
    }

    #[test]
    fn test_heading() {
        let block = Block::Heading {
            level: 2,
            content: vec![Inline::text("Title")],
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "## Title");
    }

    #[test]
    fn test_heading_trims_inline_text() {
        let block = Block::Heading {
            level: 1,
            content: vec![Inline::text("  Title  ")],
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "# Title");
    }

    #[test]
    fn test_bold() {
        let block = Block::Paragraph(vec![Inline::styled("bold", Marks::BOLD)]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "**bold**");
    }

    #[test]
    fn test_italic() {
        let block = Block::Paragraph(vec![Inline::styled("italic", Marks::ITALIC)]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "*italic*");
    }

    #[test]
    fn test_bold_italic_combined() {
        let block = Block::Paragraph(vec![Inline::styled("x", Marks::BOLD | Marks::ITALIC)]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "***x***");
    }

    #[test]
    fn test_code_mark_suppresses_emphasis() {
        let block = Block::Paragraph(vec![Inline::styled("x", Marks::CODE | Marks::BOLD)]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "`x`");
    }

    #[test]
    fn test_hard_break() {
        let block = Block::Paragraph(vec![
            Inline::text("a"),
            Inline::HardBreak,
            Inline::text("b"),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "a\nb");
    }

    #[test]
    fn test_blockquote_prefixes_every_line() {
        let block = Block::Blockquote(vec![
            Block::Paragraph(vec![Inline::text("a")]),
            Block::Paragraph(vec![Inline::text("b")]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "> a\n> b");
    }

    #[test]
    fn test_nested_blockquote() {
        let block = Block::Blockquote(vec![Block::Blockquote(vec![Block::Paragraph(vec![
            Inline::text("deep"),
        ])])]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "> > deep");
    }

    #[test]
    fn test_bullet_list() {
        let block = Block::BulletList(vec![
            ListItem::from_inlines(vec![Inline::text("One")]),
            ListItem::from_inlines(vec![Inline::text("Two")]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "- One\n- Two");
    }

    #[test]
    fn test_ordered_list_numbering() {
        let block = Block::OrderedList {
            start: 1,
            items: vec![
                ListItem::from_inlines(vec![Inline::text("A")]),
                ListItem::from_inlines(vec![Inline::text("B")]),
                ListItem::from_inlines(vec![Inline::text("C")]),
            ],
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "1. A\n2. B\n3. C");
    }

    #[test]
    fn test_ordered_list_custom_start() {
        let block = Block::OrderedList {
            start: 3,
            items: vec![
                ListItem::from_inlines(vec![Inline::text("A")]),
                ListItem::from_inlines(vec![Inline::text("B")]),
            ],
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "3. A\n4. B");
    }

    #[test]
    fn test_list_item_takes_first_paragraph_only() {
        let item = ListItem::new(vec![
            Block::Paragraph(vec![Inline::text("first")]),
            Block::Paragraph(vec![Inline::text("second")]),
        ]);
        let block = Block::BulletList(vec![item]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "- first");
    }

    #[test]
    fn test_empty_list_item_dropped() {
        let block = Block::BulletList(vec![
            ListItem::from_inlines(vec![Inline::text("kept")]),
            ListItem::from_inlines(vec![]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "- kept");
    }

    #[test]
    fn test_code_block_with_language() {
        let block = Block::CodeBlock {
            language: Some("rust".to_string()),
            code: "let x = 1;".to_string(),
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "```rust\nlet x = 1;\n```");
    }

    #[test]
    fn test_code_block_without_language() {
        let block = Block::CodeBlock {
            language: None,
            code: "plain".to_string(),
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "```\nplain\n```");
    }

    #[test]
    fn test_code_block_keeps_literal_content() {
        let block = Block::CodeBlock {
            language: None,
            code: "**not bold** <tag>".to_string(),
        };
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "```\n**not bold** <tag>\n```");
    }

    #[test]
    fn test_horizontal_rule() {
        let result = serialize_document(&Block::HorizontalRule, &default_options());
        assert_eq!(result, "---");
    }

    #[test]
    fn test_table_with_body() {
        let block = Block::Table(vec![
            Row::new(vec![
                Cell::new(vec![Inline::text("A")]),
                Cell::new(vec![Inline::text("B")]),
            ]),
            Row::new(vec![
                Cell::new(vec![Inline::text("1")]),
                Cell::new(vec![Inline::text("2")]),
            ]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_table_header_only_has_no_separator() {
        let block = Block::Table(vec![Row::new(vec![
            Cell::new(vec![Inline::text("A")]),
            Cell::new(vec![Inline::text("B")]),
        ])]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "| A | B |");
    }

    #[test]
    fn test_unknown_textblock_falls_back_to_inline_text() {
        let block = doc(vec![Block::Unknown {
            textblock: true,
            content: vec![Inline::text("callout text")],
        }]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "callout text");
    }

    #[test]
    fn test_unknown_non_textblock_dropped() {
        let block = doc(vec![
            Block::Unknown {
                textblock: false,
                content: vec![Inline::text("ignored")],
            },
            Block::Paragraph(vec![Inline::text("kept")]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(result, "kept");
    }

    #[test]
    fn test_slice() {
        let slice = Slice::new(vec![
            Block::Paragraph(vec![Inline::text("picked")]),
            Block::Paragraph(vec![Inline::text("up")]),
        ]);
        let result = serialize_slice(&slice, &default_options());
        assert_eq!(result, "picked\n\nup");
    }

    #[test]
    fn test_mixed_document() {
        let block = doc(vec![
            Block::Heading {
                level: 1,
                content: vec![Inline::text("Post")],
            },
            Block::Paragraph(vec![
                Inline::text("Intro with "),
                Inline::styled("emphasis", Marks::ITALIC),
                Inline::text("."),
            ]),
            Block::HorizontalRule,
            Block::BulletList(vec![ListItem::from_inlines(vec![Inline::text("point")])]),
        ]);
        let result = serialize_document(&block, &default_options());
        assert_eq!(
            result,
            "# Post\n\nIntro with *emphasis*.\n\n---\n\n- point"
        );
    }
}
