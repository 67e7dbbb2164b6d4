//! Document model types for rich-text content.
//!
//! The model is a read-only tree during export: a root [`Frame`] holding
//! blocks and nested frames, blocks holding runs, and lists that blocks
//! can belong to. Formats only record the properties declared at a node.

mod block;
mod document;
mod format;
mod list;

pub use block::{Alignment, Block, BlockFormat, BlockId, EmbeddedObject, Run, RunContent};
pub use document::{Document, DocumentBuilder, Frame, FrameKind, Node};
pub use format::{
    format_difference, Brush, BrushStyle, Capitalization, CharFormat, Color, Font, FontSize,
    UnderlineStyle, VerticalAlignment, CSS_WEIGHT_FACTOR, WEIGHT_BOLD, WEIGHT_NORMAL,
};
pub use list::{ListFormat, ListId, ListStyle, TextList};
