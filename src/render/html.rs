//! HTML export for rich-text documents.
//!
//! The exporter walks the frame tree in document order. Each block is
//! rendered against the default character format active at its position;
//! a list block may narrow that default for its own runs, but the change
//! never leaks to siblings because the default is passed down by value.

use crate::model::{
    Block, CharFormat, Document, EmbeddedObject, Frame, FrameKind, Node, Run, RunContent,
    TextList,
};

use super::escape::{escape_text, push_attribute, strip_leading_line_breaks, LINE_BREAK};
use super::mapper::{mapper_for, FormatMapper};
use super::{ExportOptions, ExportResult, ExportStats, TableMode};

/// Marker emitted before the first run of a clipboard fragment.
pub const START_FRAGMENT: &str = "<!--StartFragment-->";

/// Marker emitted after the last run of a clipboard fragment.
pub const END_FRAGMENT: &str = "<!--EndFragment-->";

/// Export a document to HTML.
pub fn to_html(doc: &Document, options: &ExportOptions) -> String {
    HtmlExporter::new(doc, options.clone()).export()
}

/// Export a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &ExportOptions) -> ExportResult {
    HtmlExporter::new(doc, options.clone()).export_with_stats()
}

/// Container opened around a block's content.
enum Container<'d> {
    ListItem(&'d TextList),
    Pre,
    Paragraph(&'static str),
    Bare,
}

/// HTML exporter.
///
/// One exporter performs one export: the output buffer and statistics are
/// owned by it and handed back when it is consumed.
pub struct HtmlExporter<'a> {
    doc: &'a Document,
    options: ExportOptions,
    mapper: Box<dyn FormatMapper>,
    seed: CharFormat,
    html: String,
    stats: ExportStats,
    start_marked: bool,
    end_marked: bool,
}

impl<'a> HtmlExporter<'a> {
    /// Create an exporter for `doc`.
    pub fn new(doc: &'a Document, options: ExportOptions) -> Self {
        let mapper = mapper_for(options.strategy);
        Self {
            doc,
            options,
            mapper,
            seed: CharFormat::export_default(doc.default_font()),
            html: String::new(),
            stats: ExportStats::new(),
            start_marked: false,
            end_marked: false,
        }
    }

    /// Replace the format mapper chosen from the options.
    pub fn with_mapper(mut self, mapper: Box<dyn FormatMapper>) -> Self {
        self.mapper = mapper;
        self
    }

    /// Export to HTML.
    pub fn export(self) -> String {
        self.export_with_stats().html
    }

    /// Export to HTML with statistics.
    pub fn export_with_stats(mut self) -> ExportResult {
        let doc = self.doc;
        let seed = self.seed.clone();
        log::debug!(
            "Exporting {} blocks with {} strategy",
            doc.block_count(),
            self.mapper.strategy()
        );

        self.emit_frame(doc.root(), &seed, 0);

        // the block reaching the document length may have been skipped
        if self.options.fragment_markers {
            if !self.start_marked {
                self.html.push_str(START_FRAGMENT);
            }
            if !self.end_marked {
                self.html.push_str(END_FRAGMENT);
            }
        }

        let html = strip_leading_line_breaks(&self.html).to_string();
        ExportResult::new(html, self.stats)
    }

    fn emit_frame(&mut self, frame: &Frame, default: &CharFormat, depth: usize) {
        let is_root = depth == 0;
        let last = frame.children.len().saturating_sub(1);

        for (index, child) in frame.children.iter().enumerate() {
            match child {
                Node::Frame(inner) => self.emit_child_frame(inner, default, depth + 1),
                Node::Block(block) => {
                    if index == last && !is_root && block.is_empty() {
                        // frame boundary marker, not authored content
                        log::trace!("Suppressing trailing empty block {}", block.id().0);
                        self.stats.suppressed_block_count += 1;
                        continue;
                    }
                    self.emit_block(block, default);
                }
            }
        }
    }

    fn emit_child_frame(&mut self, frame: &Frame, default: &CharFormat, depth: usize) {
        if depth > self.options.max_depth {
            log::warn!(
                "Skipping frame nested {} deep (limit {})",
                depth,
                self.options.max_depth
            );
            self.stats.truncated_frame_count += 1;
            return;
        }

        match frame.kind {
            FrameKind::Table { columns } => match self.options.table_mode {
                TableMode::Skip => {
                    log::debug!("Skipping table with {} cells", frame.children.len());
                    self.stats.skipped_table_count += 1;
                }
                TableMode::Render => self.emit_table(frame, columns, default, depth),
            },
            FrameKind::Text => {
                self.stats.frame_count += 1;
                self.html.push_str("\n<table>\n<tr>\n<td>");
                self.emit_frame(frame, default, depth);
                self.html.push_str("</td></tr></table>");
            }
        }
    }

    fn emit_table(&mut self, table: &Frame, columns: usize, default: &CharFormat, depth: usize) {
        self.stats.table_count += 1;
        self.html.push_str("\n<table>");
        let last = table.children.len().saturating_sub(1);
        for (row_index, row) in table.children.chunks(columns.max(1)).enumerate() {
            self.html.push_str("\n<tr>");
            for (column, cell) in row.iter().enumerate() {
                let index = row_index * columns.max(1) + column;
                self.html.push_str("\n<td>");
                match cell {
                    Node::Frame(cell) if !cell.is_table() => self.emit_frame(cell, default, depth),
                    Node::Frame(nested) => self.emit_child_frame(nested, default, depth + 1),
                    Node::Block(block) if index == last && block.is_empty() => {
                        log::trace!("Suppressing trailing empty cell block {}", block.id().0);
                        self.stats.suppressed_block_count += 1;
                    }
                    Node::Block(block) => self.emit_block(block, default),
                }
                self.html.push_str("</td>");
            }
            self.html.push_str("</tr>");
        }
        self.html.push_str("\n</table>");
    }

    fn emit_block(&mut self, block: &Block, inherited: &CharFormat) {
        let doc = self.doc;
        let mut default = inherited.clone();

        log::trace!(
            "Block {} at position {} with {} runs",
            block.id().0,
            block.position(),
            block.runs.len()
        );
        self.html.push('\n');
        self.stats.block_count += 1;

        if block.format.horizontal_rule {
            self.html.push_str("<hr />");
            self.stats.horizontal_rule_count += 1;
            return;
        }

        let mut block_closers = Vec::new();
        let container = match block.list.and_then(|id| doc.list(id)) {
            Some(list) => {
                if list.is_first(block.id()) {
                    self.html.push('<');
                    self.html.push_str(list.format.style.container_tag());
                    self.html.push('>');
                    self.stats.list_count += 1;
                }
                self.html.push_str("<li>");
                self.stats.list_item_count += 1;

                let block_diff = default.difference(&block.char_format);
                if !block_diff.is_empty() {
                    block_closers = self
                        .mapper
                        .open_format(&block_diff, &default, &mut self.html);
                    default.merge(&block.char_format);
                }
                Container::ListItem(list)
            }
            None if block.format.non_breakable_lines => {
                self.html.push_str("<pre>");
                Container::Pre
            }
            None => match self.mapper.paragraph_tag() {
                Some(tag) => {
                    self.html.push('<');
                    self.html.push_str(tag);
                    if let Some(align) = block.format.alignment.and_then(|a| a.html_value()) {
                        push_attribute(&mut self.html, "align", align);
                    }
                    self.html.push('>');
                    Container::Paragraph(tag)
                }
                None => Container::Bare,
            },
        };

        if block.is_empty() {
            self.html.push_str(LINE_BREAK);
        } else {
            if self.options.fragment_markers && !self.start_marked {
                self.html.push_str(START_FRAGMENT);
                self.start_marked = true;
            }
            for run in &block.runs {
                self.emit_fragment(run, &default);
            }
        }
        if self.options.fragment_markers
            && !self.end_marked
            && block.position() + block.length() == doc.len()
        {
            if !self.start_marked {
                self.html.push_str(START_FRAGMENT);
                self.start_marked = true;
            }
            self.html.push_str(END_FRAGMENT);
            self.end_marked = true;
        }

        match container {
            Container::ListItem(list) => {
                for closer in block_closers.iter().rev() {
                    self.html.push_str(closer);
                }
                self.html.push_str("</li>");
                if list.is_last(block.id()) {
                    self.html.push_str("</");
                    self.html.push_str(list.format.style.container_tag());
                    self.html.push('>');
                }
            }
            Container::Pre => self.html.push_str("</pre>"),
            Container::Paragraph(tag) => {
                self.html.push_str("</");
                self.html.push_str(tag);
                self.html.push('>');
            }
            Container::Bare => {}
        }
    }

    fn emit_fragment(&mut self, run: &Run, default: &CharFormat) {
        let format = &run.format;
        let mut close_anchor = false;

        if format.is_anchor() {
            if let Some(name) = format.anchor_name.as_deref().filter(|n| !n.is_empty()) {
                self.html.push_str("<a");
                push_attribute(&mut self.html, "name", name);
                self.html.push_str("></a>");
                self.stats.anchor_count += 1;
            }
            if let Some(href) = format.anchor_href.as_deref().filter(|h| !h.is_empty()) {
                self.html.push_str("<a");
                push_attribute(&mut self.html, "href", href);
                self.html.push('>');
                self.stats.link_count += 1;
                close_anchor = true;
            }
        }

        match &run.content {
            RunContent::Object {
                object: EmbeddedObject::Image { name },
            } => {
                self.html.push_str("<img");
                if let Some(name) = name {
                    push_attribute(&mut self.html, "src", name);
                }
                self.html.push_str(" />");
                self.stats.image_count += 1;
            }
            RunContent::Object {
                object: EmbeddedObject::Other { type_id },
            } => {
                log::debug!("Dropping embedded object of type {}", type_id);
                self.stats.dropped_object_count += 1;
            }
            RunContent::Text { text } => {
                let diff = default.difference(format);
                let closers = self.mapper.open_format(&diff, default, &mut self.html);
                self.html.push_str(&escape_text(text));
                for closer in closers.iter().rev() {
                    self.html.push_str(closer);
                }
            }
        }

        if close_anchor {
            self.html.push_str("</a>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Font, ListFormat, ListStyle};
    use crate::render::EmissionStrategy;

    fn export(doc: &Document) -> String {
        to_html(doc, &ExportOptions::default())
    }

    #[test]
    fn test_plain_paragraph() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::with_text("Hello, world!"));
        let doc = builder.finish();
        assert_eq!(export(&doc), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(export(&Document::default()), "");
    }

    #[test]
    fn test_empty_block_emits_line_break() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::with_text("a"));
        builder.push_block(Block::new());
        let doc = builder.finish();
        assert_eq!(export(&doc), "<p>a</p>\n<p><br /></p>");
    }

    #[test]
    fn test_horizontal_rule_short_circuits() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::horizontal_rule().with_run(Run::text("ignored")));
        let doc = builder.finish();
        assert_eq!(export(&doc), "<hr />");
    }

    #[test]
    fn test_preformatted_block() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::with_text("fn main() {}").preformatted());
        let doc = builder.finish();
        assert_eq!(export(&doc), "<pre>fn main() {}</pre>");
    }

    #[test]
    fn test_ordered_list() {
        let mut builder = Document::builder(Font::default());
        let list = builder.add_list(ListFormat::new(ListStyle::Decimal));
        builder.push_block(Block::with_text("one").in_list(list));
        builder.push_block(Block::with_text("two").in_list(list));
        let doc = builder.finish();
        assert_eq!(export(&doc), "<ol><li>one</li>\n<li>two</li></ol>");
    }

    #[test]
    fn test_list_block_format_scopes_to_item() {
        let mut builder = Document::builder(Font::default());
        let list = builder.add_list(ListFormat::new(ListStyle::Disc));
        builder.push_block(
            Block::new()
                .with_run(Run::styled("bold", CharFormat::bold()))
                .with_char_format(CharFormat::bold())
                .in_list(list),
        );
        builder.push_block(Block::new().with_run(Run::styled("next", CharFormat::bold())));
        let doc = builder.finish();

        let html = export(&doc);
        // the item format is emitted once and its runs are diffed against it
        assert_eq!(
            html,
            "<ul><li><span style=\" font-weight:600;\">bold</span></li></ul>\n\
             <p><span style=\" font-weight:600;\">next</span></p>"
        );
    }

    #[test]
    fn test_semantic_strategy_has_no_paragraph_container() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::with_text("x"));
        let doc = builder.finish();
        let options = ExportOptions::new().with_strategy(EmissionStrategy::SemanticTag);
        assert_eq!(to_html(&doc, &options), "<p>x</p>");
    }

    #[test]
    fn test_alignment_attribute() {
        let mut block = Block::with_text("centered");
        block.format.alignment = Some(crate::model::Alignment::Center);
        let mut builder = Document::builder(Font::default());
        builder.push_block(block);
        let doc = builder.finish();
        assert_eq!(export(&doc), "<p align=\"center\">centered</p>");
    }

    #[test]
    fn test_stats() {
        let mut builder = Document::builder(Font::default());
        builder.push_block(Block::with_text("a").with_run(Run::image("x.png")));
        builder.begin_table(1);
        builder.push_block(Block::with_text("cell"));
        builder.end_frame();
        builder.push_block(Block::horizontal_rule());
        let doc = builder.finish();

        let result = to_html_with_stats(&doc, &ExportOptions::default());
        assert_eq!(result.stats.block_count, 2);
        assert_eq!(result.stats.image_count, 1);
        assert_eq!(result.stats.skipped_table_count, 1);
        assert_eq!(result.stats.horizontal_rule_count, 1);
        assert!(!result.html.contains("cell"));
    }
}
