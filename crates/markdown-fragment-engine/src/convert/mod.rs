//! # Markdown Conversion
//!
//! Markdown text to an editor-safe HTML fragment.
//!
//! ## Pipeline
//!
//! 1. **`presanitize`**: newline normalization and list blank-line clean-up
//! 2. **`source`**: line iteration with byte spans
//! 3. **`blocks`**: table extraction, line classification, block building
//! 4. **`inline`**: emphasis, code spans, links and escapes within a unit
//! 5. **`emit`**: blocks to an HTML node tree
//!
//! The node tree then goes through [`crate::sanitize::prune`] and is
//! serialized with top-level blocks on separate lines.

pub mod blocks;
pub mod emit;
pub mod inline;
pub mod presanitize;
pub mod source;

use std::collections::BTreeMap;

use crate::{html::Node, sanitize};

use blocks::{Block, BlockBuilder, Segment, extract_tables};
use presanitize::presanitize;
use source::lines_with_spans;

/// Named Markdown or HTML documents, ordered by name.
pub type Sections = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Parses Markdown into its block tree.
pub fn parse_document(markdown: &str) -> ParsedDoc {
    let clean = presanitize(markdown);
    let mut builder = BlockBuilder::new();

    for segment in extract_tables(lines_with_spans(&clean)) {
        match segment {
            Segment::Line(line) => builder.push_line(&line),
            Segment::Table(table) => builder.push_table(table),
        }
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Converts Markdown to an HTML fragment. Never fails: anything that isn't
/// recognised comes through as escaped text.
pub fn markdown_to_html(markdown: &str) -> String {
    let doc = parse_document(markdown);
    let mut nodes = emit::emit_blocks(&doc.blocks);
    sanitize::prune(&mut nodes);
    nodes.iter().map(Node::to_html).collect::<Vec<_>>().join("\n")
}

/// Applies [`markdown_to_html`] to every section, keeping the names.
pub fn convert_sections_to_html(sections: &Sections) -> Sections {
    sections
        .iter()
        .map(|(name, markdown)| {
            log::trace!("converting section {name} ({} bytes)", markdown.len());
            (name.clone(), markdown_to_html(markdown))
        })
        .collect()
}
