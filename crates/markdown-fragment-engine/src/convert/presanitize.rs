//! Line-level clean-up of raw Markdown before block parsing.

use std::borrow::Cow;

use super::blocks::{
    LineClass, MarkdownLineClassifier,
    kinds::{CodeFence, FenceKind, ListKind, ListMarker},
};

/// Normalizes line endings, drops bare list markers and removes blank lines
/// that separate two items of the same marker family.
///
/// Fenced code is copied verbatim. Running it on its own output is a no-op.
pub fn presanitize(markdown: &str) -> String {
    let normalized = normalize_newlines(markdown);
    let classifier = MarkdownLineClassifier;

    let mut out: Vec<&str> = Vec::new();
    let mut blanks: Vec<&str> = Vec::new();
    let mut last_item: Option<ListKind> = None;
    let mut fence: Option<FenceKind> = None;

    for line in normalized.split('\n') {
        if let Some(kind) = fence {
            if CodeFence::closes(kind, CodeFence::sig(line)) {
                fence = None;
            }
            out.push(line);
            continue;
        }

        let class = classifier.classify(line);
        if class == LineClass::Blank {
            blanks.push(line);
            continue;
        }
        if ListMarker::is_bare(line) {
            continue;
        }

        let item = match class {
            LineClass::ListItem(marker) => Some(marker.kind),
            _ => None,
        };
        if item.is_none() || item != last_item {
            out.append(&mut blanks);
        }
        blanks.clear();
        last_item = item;

        if let LineClass::Fence { sig, .. } = class {
            fence = Some(CodeFence::kind(sig));
        }
        out.push(line);
    }
    out.append(&mut blanks);
    out.join("\n")
}

fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if s.contains('\r') {
        Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(s)
    }
}
