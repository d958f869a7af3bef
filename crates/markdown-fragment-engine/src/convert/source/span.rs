/// A byte range `[start, end)` into a source string.
///
/// Inline nodes store spans rather than copied text; slicing the source with
/// any span reproduces the exact bytes the node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `src` with this span.
    ///
    /// Spans are only ever produced at ASCII delimiter boundaries, so the
    /// slice is always on a char boundary.
    #[must_use]
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}
