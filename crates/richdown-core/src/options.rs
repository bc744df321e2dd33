//! Configuration options for Markdown serialization

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// String used to join sibling block outputs
    pub paragraph_separator: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            paragraph_separator: "\n\n".to_string(),
        }
    }
}

impl SerializeOptions {
    /// Join blocks with single newlines, for embedding into single-line
    /// contexts such as comment replies.
    pub fn single_line() -> Self {
        Self {
            paragraph_separator: "\n".to_string(),
        }
    }
}
