//! # basichtml
//!
//! Minimal HTML export for rich-text documents.
//!
//! This library serializes an in-memory rich-text tree (frames containing
//! blocks containing formatted runs) into HTML, emitting only the
//! formatting that differs from the inherited default.
//!
//! ## Quick Start
//!
//! ```
//! use basichtml::model::{Block, CharFormat, Document, Font, Run};
//! use basichtml::ExportOptions;
//!
//! let mut builder = Document::builder(Font::default());
//! builder.push_block(
//!     Block::with_text("Hello, ").with_run(Run::styled("world", CharFormat::bold())),
//! );
//! let doc = builder.finish();
//!
//! let html = basichtml::to_html(&doc, &ExportOptions::default());
//! assert_eq!(
//!     html,
//!     "<p>Hello, <span style=\" font-weight:600;\">world</span></p>"
//! );
//! ```
//!
//! ## Features
//!
//! - **Minimal output**: each run is diffed against the innermost active default
//! - **Two emission strategies**: inline styles or semantic tags
//! - **Lists**: ordered/unordered containers opened and closed exactly once
//! - **Clipboard fragments**: optional start/end fragment markers
//! - **JSON input**: documents load from a serde representation

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, CharFormat, Document, Font, Frame, ListFormat, ListStyle, Run};
pub use render::{
    to_html, to_html_with_stats, EmissionStrategy, ExportOptions, ExportResult, ExportStats,
    TableMode,
};

use std::path::Path;

/// Parse a document from its JSON representation.
///
/// # Example
///
/// ```
/// let doc = basichtml::from_json_str(
///     r#"{"root": {"children": [
///         {"node": "block", "runs": [{"type": "text", "text": "hi"}]}
///     ]}}"#,
/// )?;
/// assert_eq!(doc.block_count(), 1);
/// # Ok::<(), basichtml::Error>(())
/// ```
pub fn from_json_str(json: &str) -> Result<Document> {
    let trimmed = json.trim_start();
    if trimmed.is_empty() {
        return Err(Error::InvalidDocument("empty input".to_string()));
    }
    if !trimmed.starts_with('{') {
        return Err(Error::InvalidDocument(
            "top-level value must be an object".to_string(),
        ));
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Load a document from a JSON file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

/// Load a JSON document file and export it with the given options.
pub fn export_file<P: AsRef<Path>>(path: P, options: &ExportOptions) -> Result<String> {
    let doc = load_file(path)?;
    Ok(to_html(&doc, options))
}

/// Builder for exporting documents.
///
/// # Example
///
/// ```
/// use basichtml::{BasicHtml, Block, Document, Font};
///
/// let mut builder = Document::builder(Font::default());
/// builder.push_block(Block::with_text("text"));
/// let doc = builder.finish();
///
/// let html = BasicHtml::new().semantic_tags().fragment_markers().export(&doc);
/// assert_eq!(html, "<!--StartFragment--><p>text</p><!--EndFragment-->");
/// ```
pub struct BasicHtml {
    options: ExportOptions,
}

impl BasicHtml {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Emit inline style declarations.
    pub fn style_attributes(mut self) -> Self {
        self.options = self.options.with_strategy(EmissionStrategy::Attribute);
        self
    }

    /// Emit heading, paragraph and phrase tags.
    pub fn semantic_tags(mut self) -> Self {
        self.options = self.options.with_strategy(EmissionStrategy::SemanticTag);
        self
    }

    /// Wrap output in clipboard fragment markers.
    pub fn fragment_markers(mut self) -> Self {
        self.options = self.options.with_fragment_markers(true);
        self
    }

    /// Render table frames instead of skipping them.
    pub fn render_tables(mut self) -> Self {
        self.options = self.options.with_table_mode(TableMode::Render);
        self
    }

    /// Set the frame nesting bound.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// The options built so far.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a document.
    pub fn export(&self, doc: &Document) -> String {
        to_html(doc, &self.options)
    }

    /// Export a document with statistics.
    pub fn export_with_stats(&self, doc: &Document) -> ExportResult {
        to_html_with_stats(doc, &self.options)
    }

    /// Load a JSON document file and export it.
    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        export_file(path, &self.options)
    }
}

impl Default for BasicHtml {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chained() {
        let builder = BasicHtml::new()
            .semantic_tags()
            .fragment_markers()
            .render_tables()
            .with_max_depth(3);

        let options = builder.options();
        assert_eq!(options.strategy, EmissionStrategy::SemanticTag);
        assert!(options.fragment_markers);
        assert_eq!(options.table_mode, TableMode::Render);
        assert_eq!(options.max_depth, 3);
    }

    #[test]
    fn test_builder_default() {
        let builder = BasicHtml::default().semantic_tags().style_attributes();
        assert_eq!(builder.options().strategy, EmissionStrategy::Attribute);
        assert!(!builder.options().fragment_markers);
    }

    #[test]
    fn test_from_json_str_empty() {
        assert!(matches!(
            from_json_str("  "),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_from_json_str_not_object() {
        assert!(matches!(
            from_json_str("[1, 2]"),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_from_json_str_scalar_top_level() {
        for json in ["42", "\"text\"", "null", "  true"] {
            assert!(
                matches!(from_json_str(json), Err(Error::InvalidDocument(_))),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_from_json_str_leading_whitespace() {
        let doc = from_json_str("\n  {\"root\": {\"children\": []}}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_from_json_str_malformed() {
        assert!(matches!(from_json_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_str_defaults() {
        let doc = from_json_str("{}").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.default_font(), &Font::default());
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("/nonexistent/document.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
