use crate::convert::source::LineRef;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, FenceKind},
    list::{ListEvent, ListState},
    types::{Block, Table},
};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph(Vec<String>),
    /// Quote paragraphs; a bare `>` starts a new one.
    Quote(Vec<Vec<String>>),
    Fence {
        kind: FenceKind,
        language: Option<String>,
        lines: Vec<String>,
    },
}

/// Builds [`Block`]s from a stream of lines and pre-extracted tables.
///
/// At most one of the leaf block and the list is open at a time: a list item
/// flushes the leaf, and any other non-blank line flushes the list.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    leaf: LeafState,
    list: ListState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            leaf: LeafState::None,
            list: ListState::NoList,
            out: vec![],
        }
    }

    pub fn push_line(&mut self, line: &LineRef<'_>) {
        if self.in_fence() {
            self.consume_fence_line(line.text);
            return;
        }

        match self.classifier.classify(line.text) {
            LineClass::Blank => {
                // An open list survives blank lines.
                if !self.list.is_open() {
                    self.flush_leaf();
                }
            }
            LineClass::Fence { sig, line } => {
                self.close_all();
                self.leaf = LeafState::Fence {
                    kind: CodeFence::kind(sig),
                    language: CodeFence::language(line).map(str::to_string),
                    lines: vec![],
                };
            }
            LineClass::Heading { level, text } => {
                self.close_all();
                self.out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::Rule => {
                self.close_all();
                self.out.push(Block::Rule);
            }
            LineClass::Quote { text } => {
                self.close_list();
                self.extend_quote(text.trim());
            }
            LineClass::ListItem(marker) => {
                self.flush_leaf();
                if let Some(list) = self.list.step(ListEvent::Item(marker)) {
                    self.out.push(Block::List(list));
                }
            }
            LineClass::Plain(text) => {
                self.close_list();
                self.extend_paragraph(text.trim());
            }
        }
    }

    pub fn push_table(&mut self, table: Table) {
        self.close_all();
        self.out.push(Block::Table(table));
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence is emitted as is
        self.close_all();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, text: &str) {
        let LeafState::Fence { kind, lines, .. } = &mut self.leaf else {
            return;
        };
        if CodeFence::closes(*kind, CodeFence::sig(text)) {
            self.flush_leaf();
        } else {
            lines.push(text.to_string());
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        match &mut self.leaf {
            LeafState::Paragraph(lines) => lines.push(text.to_string()),
            _ => {
                self.flush_leaf();
                self.leaf = LeafState::Paragraph(vec![text.to_string()]);
            }
        }
    }

    fn extend_quote(&mut self, text: &str) {
        if !matches!(self.leaf, LeafState::Quote(_)) {
            self.flush_leaf();
            self.leaf = LeafState::Quote(vec![vec![]]);
        }
        let LeafState::Quote(paragraphs) = &mut self.leaf else {
            return;
        };
        if text.is_empty() {
            if paragraphs.last().is_some_and(|p| !p.is_empty()) {
                paragraphs.push(vec![]);
            }
        } else if let Some(current) = paragraphs.last_mut() {
            current.push(text.to_string());
        }
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.step(ListEvent::Other) {
            self.out.push(Block::List(list));
        }
    }

    fn close_all(&mut self) {
        self.flush_leaf();
        self.close_list();
    }

    fn flush_leaf(&mut self) {
        match std::mem::take(&mut self.leaf) {
            LeafState::None => {}
            LeafState::Paragraph(lines) => self.out.push(Block::Paragraph { lines }),
            LeafState::Quote(mut paragraphs) => {
                paragraphs.retain(|p| !p.is_empty());
                if !paragraphs.is_empty() {
                    self.out.push(Block::BlockQuote { paragraphs });
                }
            }
            LeafState::Fence {
                language, lines, ..
            } => self.out.push(Block::CodeBlock {
                language,
                code: lines.join("\n"),
            }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::blocks::{kinds::ListKind, types::List};
    use crate::convert::source::lines_with_spans;
    use pretty_assertions::assert_eq;

    fn build(src: &str) -> Vec<Block> {
        let mut builder = BlockBuilder::new();
        for line in lines_with_spans(src) {
            builder.push_line(&line);
        }
        builder.finish()
    }

    fn para(lines: &[&str]) -> Block {
        Block::Paragraph {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ul(items: &[&str]) -> Block {
        Block::List(List {
            kind: ListKind::Unordered,
            start: None,
            items: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(
            build("one\ntwo\n\nthree"),
            vec![para(&["one", "two"]), para(&["three"])]
        );
    }

    #[test]
    fn paragraph_lines_are_trimmed() {
        assert_eq!(build("  a  \n\tb"), vec![para(&["a", "b"])]);
    }

    #[test]
    fn heading_ends_paragraph() {
        assert_eq!(
            build("intro\n## Scope\nbody"),
            vec![
                para(&["intro"]),
                Block::Heading {
                    level: 2,
                    text: "Scope".into()
                },
                para(&["body"]),
            ]
        );
    }

    #[test]
    fn list_survives_blank_lines() {
        assert_eq!(build("- a\n\n\n- b"), vec![ul(&["a", "b"])]);
    }

    #[test]
    fn list_item_ends_paragraph_and_prose_ends_list() {
        assert_eq!(
            build("lead\n- a\n- b\nafter"),
            vec![para(&["lead"]), ul(&["a", "b"]), para(&["after"])]
        );
    }

    #[test]
    fn bare_marker_closes_list_and_stays_text() {
        assert_eq!(
            build("- a\n-\n- b"),
            vec![ul(&["a"]), para(&["-"]), ul(&["b"])]
        );
    }

    #[test]
    fn family_switch_makes_two_lists() {
        let blocks = build("- a\n1. b");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ul(&["a"]));
        assert!(matches!(&blocks[1], Block::List(List { kind: ListKind::Ordered, .. })));
    }

    #[test]
    fn triple_star_line_is_rule_but_emphasis_is_not() {
        assert_eq!(
            build("***\n***x***"),
            vec![Block::Rule, para(&["***x***"])]
        );
    }

    #[test]
    fn fenced_code_is_raw() {
        assert_eq!(
            build("```rust\n# not a heading\n- not a list\n```\nafter"),
            vec![
                Block::CodeBlock {
                    language: Some("rust".into()),
                    code: "# not a heading\n- not a list".into(),
                },
                para(&["after"]),
            ]
        );
    }

    #[test]
    fn tilde_fence_ignores_backtick_line() {
        assert_eq!(
            build("~~~\n```\n~~~"),
            vec![Block::CodeBlock {
                language: None,
                code: "```".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(
            build("```\ncode\n\nmore"),
            vec![Block::CodeBlock {
                language: None,
                code: "code\n\nmore".into(),
            }]
        );
    }

    #[test]
    fn quote_lines_group_into_paragraphs() {
        assert_eq!(
            build("> a\n> b\n>\n>> c\n\nafter"),
            vec![
                Block::BlockQuote {
                    paragraphs: vec![vec!["a".into(), "b".into()], vec!["c".into()]],
                },
                para(&["after"]),
            ]
        );
    }

    #[test]
    fn quote_of_bare_markers_emits_nothing() {
        assert_eq!(build(">\n>"), vec![]);
    }

    #[test]
    fn table_closes_open_blocks() {
        let mut builder = BlockBuilder::new();
        for line in lines_with_spans("- a") {
            builder.push_line(&line);
        }
        let table = Table {
            header: vec!["A".into()],
            alignments: vec![Default::default()],
            rows: vec![],
        };
        builder.push_table(table.clone());
        assert_eq!(builder.finish(), vec![ul(&["a"]), Block::Table(table)]);
    }
}
