//! Rendering module for exporting documents to HTML.

pub mod escape;
mod html;
pub mod mapper;
mod options;
mod result;

pub use escape::{escape_html, escape_text};
pub use html::{to_html, to_html_with_stats, HtmlExporter, END_FRAGMENT, START_FRAGMENT};
pub use mapper::{
    mapper_for, size_name, FormatMapper, Heading, SemanticTagMapper, StyleAttributeMapper,
};
pub use options::{EmissionStrategy, ExportOptions, TableMode, DEFAULT_MAX_DEPTH};
pub use result::{ExportResult, ExportStats};
