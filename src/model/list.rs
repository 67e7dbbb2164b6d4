//! List membership types.

use serde::{Deserialize, Serialize};

use super::BlockId;

/// Index of a list within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub usize);

/// A list that blocks can belong to.
///
/// Item numbers and the item count are queried from the membership the
/// document records while indexing, not counted during export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextList {
    /// List format
    #[serde(default)]
    pub format: ListFormat,

    /// Member blocks in document order, so sorted by id
    #[serde(skip)]
    pub(crate) items: Vec<BlockId>,
}

impl TextList {
    /// Create a list with the given format.
    pub fn new(format: ListFormat) -> Self {
        Self {
            format,
            items: Vec::new(),
        }
    }

    /// Position of a block within this list.
    pub fn item_number(&self, block: BlockId) -> Option<usize> {
        self.items.binary_search(&block).ok()
    }

    /// Number of blocks in the list.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the list renders as an ordered list.
    pub fn is_ordered(&self) -> bool {
        self.format.style.is_ordered()
    }

    /// Check if `block` is the first item.
    pub fn is_first(&self, block: BlockId) -> bool {
        self.items.first() == Some(&block)
    }

    /// Check if `block` is the last item.
    pub fn is_last(&self, block: BlockId) -> bool {
        self.items.last() == Some(&block)
    }
}

/// List formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFormat {
    /// Numbering or bullet style
    pub style: ListStyle,

    /// Indentation level (1 = top level)
    pub indent: u8,
}

impl ListFormat {
    /// Create a list format with the given style.
    pub fn new(style: ListStyle) -> Self {
        Self { style, indent: 1 }
    }

    /// Set the indentation level.
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

/// Numbering or bullet style of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    /// Filled circle bullet
    #[default]
    Disc,
    /// Hollow circle bullet
    Circle,
    /// Square bullet
    Square,
    /// 1, 2, 3, ...
    Decimal,
    /// a, b, c, ...
    LowerAlpha,
    /// A, B, C, ...
    UpperAlpha,
    /// i, ii, iii, ...
    LowerRoman,
    /// I, II, III, ...
    UpperRoman,
}

impl ListStyle {
    /// Numbered styles render as ordered lists; bullets as unordered.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            ListStyle::Decimal
                | ListStyle::LowerAlpha
                | ListStyle::UpperAlpha
                | ListStyle::LowerRoman
                | ListStyle::UpperRoman
        )
    }

    /// Container tag name for the list.
    pub fn container_tag(self) -> &'static str {
        if self.is_ordered() {
            "ol"
        } else {
            "ul"
        }
    }
}
