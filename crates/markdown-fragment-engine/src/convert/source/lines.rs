use super::span::Span;

/// A single line of the source with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line, excluding the `\n` terminator.
    pub span: Span,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Input is expected to be `\n`-normalized (the pre-sanitizer does this).
/// A trailing terminator does not produce an extra empty line.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}
