//! # richdown
//!
//! The markdown engine of the blog editor: renders the flavored Markdown
//! dialect to sanitized HTML fragments, and serializes the editor's rich
//! document tree back to Markdown via [`richdown_core`].
//!
//! On every edit the document is serialized to Markdown, which feeds both
//! the live preview and, on submission, the backend; stored Markdown is
//! rendered back to HTML for read views. All literal text is HTML-escaped
//! before any tags are introduced, so user content cannot smuggle markup
//! through rendering.
//!
//! ## Example (rendering)
//!
//! ```rust
//! use richdown::{markdown_to_html, RenderOptions};
//!
//! let html = markdown_to_html("## Title", &RenderOptions::default());
//! assert_eq!(html, r#"<h2 class="md-h2">Title</h2>"#);
//! ```
//!
//! ## Example (serializing)
//!
//! ```rust
//! use richdown::{serialize_document, Block, Inline, SerializeOptions};
//!
//! let doc = Block::Document(vec![Block::Paragraph(vec![Inline::text("Hello")])]);
//! let markdown = serialize_document(&doc, &SerializeOptions::default());
//! assert_eq!(markdown, "Hello");
//! ```

mod editor;
mod highlight;
mod inline;
mod options;
mod render;
mod thumbnail;
mod upload;

pub use editor::render_editor_overlay;
pub use highlight::highlight_code;
pub use options::RenderOptions;
pub use render::{markdown_to_html, render_markdown};
pub use thumbnail::{build_default_thumbnails, extract_image_urls, Thumbnail};
pub use upload::resolve_image_url;

pub use richdown_core::{
    serialize_document, serialize_slice, Block, Cell, Inline, ListItem, Marks, Row,
    SerializeOptions, Slice,
};

/// Error type for richdown operations
#[derive(Debug, thiserror::Error)]
pub enum RichdownError {
    #[error("upload response did not contain an image URL")]
    MissingImageUrl,
}

pub type Result<T> = std::result::Result<T, RichdownError>;
