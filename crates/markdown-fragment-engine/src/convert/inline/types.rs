use crate::convert::source::Span;

/// A parsed inline node with byte spans into the unit's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A backslash-escaped punctuation character; the span covers only the
    /// character, not the backslash.
    Escaped(Span),
    /// A code span. This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `[text](url)`
    Link {
        full: Span,
        text: Vec<InlineNode>,
        /// Destination, without title or angle brackets.
        url: Span,
    },
    /// `*x*` or `_x_`
    Emphasis { full: Span, children: Vec<InlineNode> },
    /// `**x**` or `__x__`; `***x***` is a `Strong` holding an `Emphasis`.
    Strong { full: Span, children: Vec<InlineNode> },
}
