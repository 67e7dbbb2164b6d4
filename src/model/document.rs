//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Block, BlockId, Font, ListFormat, ListId, TextList};

/// A rich-text document: a root frame of nested frames and blocks.
///
/// Documents are indexed once at construction. Indexing assigns every block
/// its id and character position in document order and records list
/// membership, so the exporter can query item numbers without counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DocumentData")]
pub struct Document {
    /// Font used to seed the default character format
    default_font: Font,

    /// Lists referenced by blocks
    lists: Vec<TextList>,

    /// Root frame
    root: Frame,

    #[serde(skip)]
    block_count: usize,

    #[serde(skip)]
    length: usize,
}

/// Serialized shape of a document, before indexing.
#[derive(Deserialize)]
struct DocumentData {
    #[serde(default)]
    default_font: Font,
    #[serde(default)]
    lists: Vec<TextList>,
    #[serde(default)]
    root: Frame,
}

impl From<DocumentData> for Document {
    fn from(data: DocumentData) -> Self {
        Document::new(data.default_font, data.root, data.lists)
    }
}

impl Document {
    /// Create and index a document.
    pub fn new(default_font: Font, root: Frame, lists: Vec<TextList>) -> Self {
        let mut doc = Self {
            default_font,
            lists,
            root,
            block_count: 0,
            length: 0,
        };
        doc.reindex();
        doc
    }

    /// Start building a document with the given default font.
    pub fn builder(default_font: Font) -> DocumentBuilder {
        DocumentBuilder::new(default_font)
    }

    /// The default font.
    pub fn default_font(&self) -> &Font {
        &self.default_font
    }

    /// The root frame.
    pub fn root(&self) -> &Frame {
        &self.root
    }

    /// All lists.
    pub fn lists(&self) -> &[TextList] {
        &self.lists
    }

    /// Get a list by id.
    pub fn list(&self, id: ListId) -> Option<&TextList> {
        self.lists.get(id.0)
    }

    /// Number of blocks, including blocks inside nested frames.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Id of the first block in document order.
    pub fn first_block_id(&self) -> Option<BlockId> {
        (self.block_count > 0).then_some(BlockId(0))
    }

    /// Total document length in characters.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// Plain text of every block, one line per block.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        self.root.collect_text(&mut lines);
        lines.join("\n")
    }

    fn reindex(&mut self) {
        for list in &mut self.lists {
            list.items.clear();
        }
        let mut indexer = Indexer {
            lists: &mut self.lists,
            next_id: 0,
            position: 0,
        };
        indexer.visit_frame(&mut self.root, true);
        self.block_count = indexer.next_id;
        self.length = indexer.position;
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new(Font::default(), Frame::new(), Vec::new())
    }
}

struct Indexer<'a> {
    lists: &'a mut [TextList],
    next_id: usize,
    position: usize,
}

impl Indexer<'_> {
    fn visit_frame(&mut self, frame: &mut Frame, is_root: bool) {
        if !is_root {
            // frame start marker
            self.position += 1;
        }
        for child in &mut frame.children {
            match child {
                Node::Block(block) => self.visit_block(block),
                Node::Frame(inner) => self.visit_frame(inner, false),
            }
        }
    }

    fn visit_block(&mut self, block: &mut Block) {
        block.id = BlockId(self.next_id);
        block.position = self.position;
        self.next_id += 1;
        self.position += block.length();

        if let Some(list_id) = block.list {
            match self.lists.get_mut(list_id.0) {
                Some(list) => list.items.push(block.id),
                None => log::warn!(
                    "Block {} references missing list {}",
                    block.id.0,
                    list_id.0
                ),
            }
        }
    }
}

/// A container of blocks and nested frames.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Kind of frame
    #[serde(default)]
    pub kind: FrameKind,

    /// Children in document order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Frame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table frame.
    pub fn table(columns: usize) -> Self {
        Self {
            kind: FrameKind::Table { columns },
            children: Vec::new(),
        }
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.children.push(Node::Block(block));
    }

    /// Add a nested frame.
    pub fn add_frame(&mut self, frame: Frame) {
        self.children.push(Node::Frame(frame));
    }

    /// Check if the frame is a table.
    pub fn is_table(&self) -> bool {
        matches!(self.kind, FrameKind::Table { .. })
    }

    /// Check if the frame has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn collect_text(&self, lines: &mut Vec<String>) {
        for child in &self.children {
            match child {
                Node::Block(block) => lines.push(block.plain_text()),
                Node::Frame(frame) => frame.collect_text(lines),
            }
        }
    }
}

/// Kind of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameKind {
    /// Plain text frame
    #[default]
    Text,
    /// Table; children are cells in row-major order
    Table {
        /// Number of columns
        columns: usize,
    },
}

/// A child of a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// A block
    Block(Block),
    /// A nested frame
    Frame(Frame),
}

impl Node {
    /// Check if this node is a block.
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block(_))
    }

    /// Check if this node is a frame.
    pub fn is_frame(&self) -> bool {
        matches!(self, Node::Frame(_))
    }
}

/// Incremental document construction, cursor style.
///
/// Blocks are appended to the innermost open frame.
///
/// # Example
///
/// ```
/// use basichtml::model::{Block, Document, Font, ListFormat, ListStyle};
///
/// let mut builder = Document::builder(Font::default());
/// let list = builder.add_list(ListFormat::new(ListStyle::Decimal));
/// builder.push_block(Block::with_text("first").in_list(list));
/// builder.begin_frame();
/// builder.push_block(Block::with_text("framed"));
/// builder.end_frame();
/// let doc = builder.finish();
/// assert_eq!(doc.block_count(), 2);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    default_font: Font,
    lists: Vec<TextList>,
    stack: Vec<Frame>,
}

impl DocumentBuilder {
    /// Create a builder with an empty root frame.
    pub fn new(default_font: Font) -> Self {
        Self {
            default_font,
            lists: Vec::new(),
            stack: vec![Frame::new()],
        }
    }

    /// Register a list and return its id.
    pub fn add_list(&mut self, format: ListFormat) -> ListId {
        self.lists.push(TextList::new(format));
        ListId(self.lists.len() - 1)
    }

    /// Append a block to the innermost open frame.
    pub fn push_block(&mut self, block: Block) -> &mut Self {
        self.current().add_block(block);
        self
    }

    /// Open a nested text frame.
    pub fn begin_frame(&mut self) -> &mut Self {
        self.stack.push(Frame::new());
        self
    }

    /// Open a nested table frame.
    pub fn begin_table(&mut self, columns: usize) -> &mut Self {
        self.stack.push(Frame::table(columns));
        self
    }

    /// Close the innermost open frame. Closing the root is a no-op.
    pub fn end_frame(&mut self) -> &mut Self {
        if self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                self.current().add_frame(frame);
            }
        }
        self
    }

    /// Close any open frames and index the document.
    pub fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.end_frame();
        }
        let root = self.stack.pop().unwrap_or_default();
        Document::new(self.default_font, root, self.lists)
    }

    fn current(&mut self) -> &mut Frame {
        if self.stack.is_empty() {
            self.stack.push(Frame::new());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}
