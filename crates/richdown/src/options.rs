//! Configuration options for Markdown rendering

/// Options for rendering Markdown to HTML
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Wrap known keywords in highlight spans inside fenced code blocks
    pub highlight_syntax: bool,

    /// Emit `<br />` for blank source lines
    pub preserve_blank_lines: bool,

    /// Show the literal `#` marker before heading text, as the live editor
    /// preview does
    pub include_heading_prefix: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_syntax: false,
            preserve_blank_lines: true,
            include_heading_prefix: false,
        }
    }
}
