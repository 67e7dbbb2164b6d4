//! Export options and configuration.

use std::fmt;
use std::str::FromStr;

/// Default bound on frame nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for exporting a document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// How formatting differences are expressed
    pub strategy: EmissionStrategy,

    /// Wrap the output in clipboard fragment markers
    pub fragment_markers: bool,

    /// How table frames are handled
    pub table_mode: TableMode,

    /// Frames nested deeper than this are skipped
    pub max_depth: usize,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emission strategy.
    pub fn with_strategy(mut self, strategy: EmissionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable fragment markers.
    pub fn with_fragment_markers(mut self, enabled: bool) -> Self {
        self.fragment_markers = enabled;
        self
    }

    /// Set the table mode.
    pub fn with_table_mode(mut self, mode: TableMode) -> Self {
        self.table_mode = mode;
        self
    }

    /// Set the maximum frame nesting depth (at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            strategy: EmissionStrategy::Attribute,
            fragment_markers: false,
            table_mode: TableMode::Skip,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// How a format difference is turned into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmissionStrategy {
    /// Inline `style` declarations on `<span>` wrappers
    #[default]
    Attribute,
    /// Heading, paragraph and phrase tags
    SemanticTag,
}

impl EmissionStrategy {
    /// Parse a strategy name.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attribute" | "attributes" | "style" | "css" => Ok(EmissionStrategy::Attribute),
            "semantic" | "semantic-tag" | "semantic_tag" | "tags" => {
                Ok(EmissionStrategy::SemanticTag)
            }
            other => Err(format!("Unknown emission strategy: {}", other)),
        }
    }
}

impl FromStr for EmissionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EmissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionStrategy::Attribute => write!(f, "attribute"),
            EmissionStrategy::SemanticTag => write!(f, "semantic"),
        }
    }
}

/// How table frames are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    /// Skip tables entirely
    #[default]
    Skip,
    /// Render tables as `<table>` rows of cells
    Render,
}
