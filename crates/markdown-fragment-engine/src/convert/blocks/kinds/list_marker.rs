use std::sync::LazyLock;

use regex::Regex;

/// The marker family of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*`, `•`, `◦`, `▪`, `▸`
    Unordered,
    /// `1.`, `2.`, ...
    Ordered,
}

/// A list-item prefix recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub kind: ListKind,
    /// The number of an ordered marker (`3.` -> 3).
    pub number: Option<u64>,
    /// Item text after the marker, trimmed. May be empty for a bare marker.
    pub content: &'a str,
}

/// `-`/`*` and numbers need whitespace (or end of line) after them so that
/// `*emphasis*`, `---` and `1.5` are not read as markers. The typographic
/// bullets may touch their text.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:([-*])(?:\s+|$)|([•◦▪▸])\s*|(\d{1,9})\.(?:\s+|$))(.*)$")
        .expect("list marker regex is valid")
});

impl<'a> ListMarker<'a> {
    /// Recognizes a marker at the start of `line`, bare markers included.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = MARKER.captures(line)?;
        let content = caps.get(4).map_or("", |m| m.as_str()).trim();
        if let Some(num) = caps.get(3) {
            return Some(Self {
                kind: ListKind::Ordered,
                number: num.as_str().parse().ok(),
                content,
            });
        }
        Some(Self {
            kind: ListKind::Unordered,
            number: None,
            content,
        })
    }

    /// Recognizes a marker followed by actual item text.
    pub fn parse_item(line: &'a str) -> Option<Self> {
        Self::parse(line).filter(|m| !m.content.is_empty())
    }

    /// True for a line holding a marker and nothing else (`-`, `*`, `3.`).
    pub fn is_bare(line: &str) -> bool {
        ListMarker::parse(line).is_some_and(|m| m.content.is_empty())
    }
}
