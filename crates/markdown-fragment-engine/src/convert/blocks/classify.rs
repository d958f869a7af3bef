use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListMarker, Rule};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently of its neighbours; the
/// [`BlockBuilder`](super::BlockBuilder) decides what the class means in
/// context (a fence line inside an open fence is code, a blank line inside an
/// open list is ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// Opening or closing code fence, with the full line for the info string.
    Fence { sig: FenceSig, line: &'a str },
    Heading { level: u8, text: &'a str },
    Rule,
    /// A `>` line; `text` is empty for a bare `>`.
    Quote { text: &'a str },
    /// A list marker followed by item text.
    ListItem(ListMarker<'a>),
    /// Anything else, including a list marker with no text after it.
    Plain(&'a str),
}

/// Classifies individual lines for the block building phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, fence, heading, rule, quote, list item, plain. A rule
    /// is tested before list items so `***` and `---` never open a list.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some(sig) = CodeFence::sig(line) {
            return LineClass::Fence { sig, line };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if let Some(text) = BlockQuote::content(line) {
            return LineClass::Quote { text };
        }
        if let Some(marker) = ListMarker::parse_item(line) {
            return LineClass::ListItem(marker);
        }
        LineClass::Plain(line)
    }
}
