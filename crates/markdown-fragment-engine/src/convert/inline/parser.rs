use std::collections::HashMap;

use crate::convert::source::Span;

use super::{
    cursor::{Cursor, run_len_at},
    kinds::{CodeSpan, Emphasis, Escape, Link},
    types::InlineNode,
};

/// Emphasis nested deeper than this is left as literal text.
const MAX_NESTING: usize = 16;

/// Parentheses nested deeper than this inside a link destination end the
/// link attempt.
const MAX_URL_PARENS: usize = 32;

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset where `s` begins in the unit's text (for absolute
///   span positions)
/// - `s`: The string content to parse
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`. Unclosed constructs are text.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    parse_nested(base, s, 0)
}

fn parse_nested(base: usize, s: &str, depth: usize) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();
    let mut misses = CloserMisses::default();
    let mut parens = ParenMatches::default();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let parsed = match cur.peek() {
            Some(Escape::BACKSLASH) => try_parse_escape(&mut cur),
            Some(CodeSpan::TICK) => try_parse_code_span(&mut cur, &mut misses),
            Some(Link::TEXT_OPEN) => try_parse_link(&mut cur, &mut parens, depth),
            Some(b) if Emphasis::is_delimiter(b) && depth < MAX_NESTING => {
                try_parse_emphasis(&mut cur, &mut misses, depth)
            }
            _ => None,
        };

        match parsed {
            Some(node) => {
                flush_text(&mut out, text_start, start);
                text_start = cur.pos();
                out.push(node);
            }
            None => match cur.peek() {
                // A delimiter run that did not pair is literal as a whole.
                Some(b) if b == CodeSpan::TICK || Emphasis::is_delimiter(b) => {
                    cur.bump_n(cur.run_len(b));
                }
                _ => {
                    cur.bump();
                }
            },
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Earliest local position from which a closer search already failed, per
/// delimiter byte and run length. Closer validity depends only on the bytes
/// around the closer, so a later search starting further on fails as well.
#[derive(Default)]
struct CloserMisses(HashMap<(u8, usize), usize>);

impl CloserMisses {
    fn known_missing(&self, delim: u8, len: usize, from: usize) -> bool {
        self.0.get(&(delim, len)).is_some_and(|&p| from >= p)
    }

    fn record(&mut self, delim: u8, len: usize, from: usize) {
        let p = self.0.entry((delim, len)).or_insert(from);
        *p = (*p).min(from);
    }
}

/// Matching `)` for every `(` of the unit, with the deepest nesting between
/// them. Built in one pass on the first link attempt.
#[derive(Default)]
struct ParenMatches(Option<HashMap<usize, (usize, usize)>>);

impl ParenMatches {
    /// Local position of the `)` closing the `(` at `open`, if any.
    fn close_for(&mut self, bytes: &[u8], open: usize) -> Option<usize> {
        let table = self.0.get_or_insert_with(|| Self::build(bytes));
        match table.get(&open) {
            Some(&(close, nested)) if nested <= MAX_URL_PARENS => Some(close),
            _ => None,
        }
    }

    fn build(bytes: &[u8]) -> HashMap<usize, (usize, usize)> {
        let mut table = HashMap::new();
        // (open position, deepest nesting seen inside it)
        let mut stack: Vec<(usize, usize)> = vec![];
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                Link::URL_OPEN => stack.push((i, 0)),
                Link::URL_CLOSE => {
                    if let Some((open, nested)) = stack.pop() {
                        table.insert(open, (i, nested));
                        if let Some(parent) = stack.last_mut() {
                            parent.1 = parent.1.max(nested + 1);
                        }
                    }
                }
                _ => {}
            }
        }
        table
    }
}

/// `\*` and friends. Returns `None` for a backslash before anything else.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let next = cur.peek_at(1)?;
    if !Escape::escapes(next) {
        return None;
    }
    let start = cur.pos() + 1;
    cur.bump_n(2);
    Some(InlineNode::Escaped(Span::new(start, start + 1)))
}

/// Attempts to parse a code span starting at the current position.
///
/// An opening run of N backticks is closed by the next run of exactly N.
/// Returns `None` if the span isn't closed; cursor position is unchanged.
fn try_parse_code_span(cur: &mut Cursor<'_>, misses: &mut CloserMisses) -> Option<InlineNode> {
    let open = cur.run_len(CodeSpan::TICK);
    let from = cur.i + open;
    if misses.known_missing(CodeSpan::TICK, open, from) {
        return None;
    }

    let Some(close) = find_run(cur.s.as_bytes(), from, CodeSpan::TICK, open, |_| true) else {
        misses.record(CodeSpan::TICK, open, from);
        return None;
    };

    let start = cur.pos();
    let inner = Span::new(cur.base + from, cur.base + close);
    cur.i = close + open;
    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner,
    })
}

/// Attempts to parse `[text](url)` at the current position.
///
/// The text may not contain another `[`; the destination may contain
/// balanced parentheses. Returns `None` (cursor unchanged) on any mismatch,
/// an empty destination, or a destination with a scheme outside
/// [`Link::SAFE_SCHEMES`].
fn try_parse_link(
    cur: &mut Cursor<'_>,
    parens: &mut ParenMatches,
    depth: usize,
) -> Option<InlineNode> {
    let bytes = cur.s.as_bytes();
    let text_start = cur.i + 1;

    let mut j = text_start;
    while j < bytes.len() && bytes[j] != Link::TEXT_CLOSE {
        if bytes[j] == Link::TEXT_OPEN {
            return None;
        }
        if bytes[j] == Escape::BACKSLASH {
            j += 1;
        }
        j += 1;
    }
    let text_end = j;
    if bytes.get(text_end) != Some(&Link::TEXT_CLOSE)
        || bytes.get(text_end + 1) != Some(&Link::URL_OPEN)
    {
        return None;
    }

    let url_start = text_end + 2;
    let k = parens.close_for(bytes, text_end + 1)?;

    let inner = &cur.s[url_start..k];
    let dest = Link::destination(inner);
    if dest.is_empty() || !Link::is_safe(dest) {
        return None;
    }
    // `dest` is a subslice of `inner`; recover its offset.
    let dest_offset = url_start + (dest.as_ptr() as usize - inner.as_ptr() as usize);

    let start = cur.pos();
    let text = parse_nested(
        cur.base + text_start,
        &cur.s[text_start..text_end],
        depth + 1,
    );
    let url = Span {
        start: cur.base + dest_offset,
        end: cur.base + dest_offset + dest.len(),
    };
    cur.i = k + 1;
    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        text,
        url,
    })
}

/// Attempts to pair the delimiter run at the cursor with a closing run of the
/// same length. Returns `None` (cursor unchanged) when the run cannot open or
/// has no closer.
fn try_parse_emphasis(
    cur: &mut Cursor<'_>,
    misses: &mut CloserMisses,
    depth: usize,
) -> Option<InlineNode> {
    let delim = cur.peek()?;
    let len = cur.run_len(delim);
    if len > Emphasis::MAX_RUN {
        return None;
    }

    let after_open = cur.s.get(cur.i + len..).and_then(|s| s.chars().next());
    if !Emphasis::can_open(delim, cur.prev_char(), after_open) {
        return None;
    }

    let from = cur.i + len;
    if misses.known_missing(delim, len, from) {
        return None;
    }
    let s = cur.s;
    let close = find_run(s.as_bytes(), from, delim, len, |j| {
        let before = s[..j].chars().next_back();
        let after = s[j + len..].chars().next();
        Emphasis::can_close(delim, before, after)
    });
    let Some(close) = close else {
        misses.record(delim, len, from);
        return None;
    };

    let start = cur.pos();
    let children = parse_nested(cur.base + from, &s[from..close], depth + 1);
    cur.i = close + len;
    let full = Span {
        start,
        end: cur.pos(),
    };

    Some(match len {
        1 => InlineNode::Emphasis { full, children },
        2 => InlineNode::Strong { full, children },
        _ => InlineNode::Strong {
            full,
            children: vec![InlineNode::Emphasis {
                full: Span {
                    start: full.start + 1,
                    end: full.end - 1,
                },
                children,
            }],
        },
    })
}

/// Finds the next maximal run of exactly `len` bytes `b` at or after `from`
/// that `accept` agrees to, returning its local start.
fn find_run(
    bytes: &[u8],
    from: usize,
    b: u8,
    len: usize,
    accept: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b {
            let run = run_len_at(bytes, j, b);
            if run == len && accept(j) {
                return Some(j);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}
