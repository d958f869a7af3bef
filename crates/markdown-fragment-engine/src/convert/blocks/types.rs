use super::kinds::{Alignment, ListKind};

/// A GFM table: header row, per-column alignment and body rows.
///
/// Body rows always have exactly as many cells as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

/// A flat list with at least one non-blank item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    /// First number of an ordered list when it is not 1.
    pub start: Option<u64>,
    pub items: Vec<String>,
}

/// A block in the document tree. Text fields hold the raw Markdown of their
/// inline content; inline parsing happens at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level is 1..=3.
    Heading { level: u8, text: String },
    /// One entry per source line; rendered joined by `<br>`.
    Paragraph { lines: Vec<String> },
    List(List),
    Table(Table),
    /// Paragraphs of quoted lines.
    BlockQuote { paragraphs: Vec<Vec<String>> },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Rule,
}
