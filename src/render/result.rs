//! Export result with statistics.

use serde::{Deserialize, Serialize};

/// Result of exporting a document, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    /// The exported markup
    pub html: String,

    /// Export statistics
    pub stats: ExportStats,
}

impl ExportResult {
    /// Create a new export result.
    pub fn new(html: String, stats: ExportStats) -> Self {
        Self { html, stats }
    }

    /// Get the output length in bytes.
    pub fn html_len(&self) -> usize {
        self.html.len()
    }
}

/// Statistics collected while exporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Blocks rendered (excluding suppressed sentinels)
    pub block_count: u32,

    /// Blocks rendered as list items
    pub list_item_count: u32,

    /// List containers opened
    pub list_count: u32,

    /// Images emitted
    pub image_count: u32,

    /// Named anchors emitted
    pub anchor_count: u32,

    /// Links emitted
    pub link_count: u32,

    /// Text frames rendered
    pub frame_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Tables skipped
    pub skipped_table_count: u32,

    /// Horizontal rules emitted
    pub horizontal_rule_count: u32,

    /// Empty trailing blocks suppressed as frame boundary markers
    pub suppressed_block_count: u32,

    /// Embedded objects dropped because they are not images
    pub dropped_object_count: u32,

    /// Frames skipped because they exceeded the depth bound
    pub truncated_frame_count: u32,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}
