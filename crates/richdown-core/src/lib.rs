//! richdown-core - Rich document tree and Markdown serialization
//!
//! This crate provides the editor's document model and its serialization to
//! Markdown text. It is used by `richdown` (rendering and preview helpers)
//! and by the editor glue that snapshots the live document on every edit.
//!
//! # Architecture
//!
//! ```text
//! Editor document ──snapshot──▶ ┌───────────────┐
//!                               │               │
//!                               │ Rich doc tree │ ──▶ Markdown String
//! Selection slice ─────────────▶│               │
//!                               └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richdown_core::{serialize_document, Block, Inline, Marks, SerializeOptions};
//!
//! let doc = Block::Document(vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::text("Hello World")],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::text("This is "),
//!         Inline::styled("bold", Marks::BOLD),
//!         Inline::text(" text."),
//!     ]),
//! ]);
//!
//! let markdown = serialize_document(&doc, &SerializeOptions::default());
//! assert_eq!(markdown, "# Hello World\n\nThis is **bold** text.");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{Block, Cell, Inline, ListItem, Marks, Row, Slice};
pub use options::SerializeOptions;
pub use serialize::{serialize_document, serialize_slice};
