//! Block and run types.

use serde::{Deserialize, Serialize};

use super::{CharFormat, ListId};

/// Index of a block in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub usize);

/// A paragraph-level unit of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Block-level formatting
    #[serde(default)]
    pub format: BlockFormat,

    /// Character format declared on the block itself
    #[serde(default, skip_serializing_if = "CharFormat::is_empty")]
    pub char_format: CharFormat,

    /// Runs in document order
    #[serde(default)]
    pub runs: Vec<Run>,

    /// List this block belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListId>,

    /// Assigned when the owning document is indexed
    #[serde(skip)]
    pub(crate) id: BlockId,

    /// Character position, assigned when the owning document is indexed
    #[serde(skip)]
    pub(crate) position: usize,
}

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block holding a single unformatted text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut block = Self::new();
        block.add_run(Run::text(text));
        block
    }

    /// Create a horizontal rule block.
    pub fn horizontal_rule() -> Self {
        Self {
            format: BlockFormat {
                horizontal_rule: true,
                ..Default::default()
            },
            ..Self::default()
        }
    }

    /// Add a run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Builder form of [`Block::add_run`].
    pub fn with_run(mut self, run: Run) -> Self {
        self.add_run(run);
        self
    }

    /// Put the block into a list.
    pub fn in_list(mut self, list: ListId) -> Self {
        self.list = Some(list);
        self
    }

    /// Set the block's character format.
    pub fn with_char_format(mut self, format: CharFormat) -> Self {
        self.char_format = format;
        self
    }

    /// Set the block format.
    pub fn with_format(mut self, format: BlockFormat) -> Self {
        self.format = format;
        self
    }

    /// Mark the block as preformatted.
    pub fn preformatted(mut self) -> Self {
        self.format.non_breakable_lines = true;
        self
    }

    /// Identifier in document order.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Character position within the document.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length in characters, including the block separator.
    pub fn length(&self) -> usize {
        self.runs.iter().map(Run::length).sum::<usize>() + 1
    }

    /// Check if the block has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Plain text of the block; objects are omitted.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|run| match &run.content {
                RunContent::Text { text } => Some(text.as_str()),
                RunContent::Object { .. } => None,
            })
            .collect()
    }
}

/// Block-level formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockFormat {
    /// Block is a trailing horizontal rule
    pub horizontal_rule: bool,

    /// Lines must not be broken (preformatted text)
    pub non_breakable_lines: bool,

    /// Horizontal alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Value of the `align` attribute; `None` for the default.
    pub fn html_value(self) -> Option<&'static str> {
        match self {
            Alignment::Left => None,
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::Justify => Some("justify"),
        }
    }
}

/// A contiguous span of text or a single embedded object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// Payload
    #[serde(flatten)]
    pub content: RunContent,

    /// Character format declared on the run
    #[serde(default, skip_serializing_if = "CharFormat::is_empty")]
    pub format: CharFormat,
}

impl Run {
    /// Unformatted text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text { text: text.into() },
            format: CharFormat::default(),
        }
    }

    /// Text with a format.
    pub fn styled(text: impl Into<String>, format: CharFormat) -> Self {
        Self {
            content: RunContent::Text { text: text.into() },
            format,
        }
    }

    /// Image reference.
    pub fn image(name: impl Into<String>) -> Self {
        Self::object(EmbeddedObject::Image {
            name: Some(name.into()),
        })
    }

    /// Embedded object.
    pub fn object(object: EmbeddedObject) -> Self {
        Self {
            content: RunContent::Object { object },
            format: CharFormat::default(),
        }
    }

    /// Length in characters; objects count as one.
    pub fn length(&self) -> usize {
        match &self.content {
            RunContent::Text { text } => text.chars().count(),
            RunContent::Object { .. } => 1,
        }
    }
}

/// Payload of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunContent {
    /// Plain text
    Text {
        /// Text content
        text: String,
    },
    /// Embedded object placeholder
    Object {
        /// The object
        object: EmbeddedObject,
    },
}

/// Object embedded in the text flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbeddedObject {
    /// Image reference
    Image {
        /// Declared image name
        #[serde(default)]
        name: Option<String>,
    },
    /// Any other object kind
    Other {
        /// Host-defined object type
        type_id: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_length_counts_separator() {
        let block = Block::with_text("héllo").with_run(Run::image("cat.png"));
        assert_eq!(block.length(), 5 + 1 + 1);
        assert_eq!(Block::new().length(), 1);
    }

    #[test]
    fn test_block_plain_text_skips_objects() {
        let block = Block::with_text("a")
            .with_run(Run::image("x.png"))
            .with_run(Run::text("b"));
        assert_eq!(block.plain_text(), "ab");
    }

    #[test]
    fn test_run_json_shape() {
        let run: Run = serde_json::from_str(
            r#"{"type": "text", "text": "hi", "format": {"font_italic": true}}"#,
        )
        .unwrap();
        assert!(matches!(run.content, RunContent::Text { ref text } if text == "hi"));
        assert_eq!(run.format.font_italic, Some(true));

        let image: Run =
            serde_json::from_str(r#"{"type": "object", "object": {"kind": "image"}}"#).unwrap();
        assert!(matches!(
            image.content,
            RunContent::Object {
                object: EmbeddedObject::Image { name: None }
            }
        ));
    }

    #[test]
    fn test_alignment_values() {
        assert_eq!(Alignment::Left.html_value(), None);
        assert_eq!(Alignment::Center.html_value(), Some("center"));
    }
}
