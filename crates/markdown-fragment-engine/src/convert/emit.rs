//! Block tree to HTML node tree.

use html_escape::{decode_html_entities, encode_text};

use crate::html::{Element, Node};

use super::{
    blocks::{
        Block, List, Table,
        kinds::{Alignment, ListKind},
    },
    inline::{InlineNode, parse_inline},
};

/// Emits one top-level node per block.
pub fn emit_blocks(blocks: &[Block]) -> Vec<Node> {
    blocks.iter().map(emit_block).collect()
}

fn emit_block(block: &Block) -> Node {
    let el = match block {
        Block::Heading { level, text } => {
            Element::new(&format!("h{level}")).with_children(inline(text))
        }
        Block::Paragraph { lines } => Element::new("p").with_children(lines_with_breaks(lines)),
        Block::List(list) => emit_list(list),
        Block::Table(table) => emit_table(table),
        Block::BlockQuote { paragraphs } => Element::new("blockquote").with_children(
            paragraphs
                .iter()
                .map(|lines| Element::new("p").with_children(lines_with_breaks(lines)).into())
                .collect(),
        ),
        Block::CodeBlock { language, code } => {
            let mut el = Element::new("code");
            if let Some(lang) = language {
                el = el.with_attr("class", &format!("language-{lang}"));
            }
            let code = el.with_children(vec![Node::text(encode_text(code))]);
            Element::new("pre").with_children(vec![code.into()])
        }
        Block::Rule => Element::new("hr"),
    };
    el.into()
}

fn emit_list(list: &List) -> Element {
    let mut el = match list.kind {
        ListKind::Unordered => Element::new("ul"),
        ListKind::Ordered => Element::new("ol"),
    };
    if let Some(start) = list.start {
        el = el.with_attr("start", &start.to_string());
    }
    el.with_children(
        list.items
            .iter()
            .map(|item| Element::new("li").with_children(inline(item)).into())
            .collect(),
    )
}

fn emit_table(table: &Table) -> Element {
    let row = |cells: &[String], tag: &str| -> Node {
        let cells: Vec<Node> = cells
            .iter()
            .zip(&table.alignments)
            .map(|(cell, align)| {
                let mut el = Element::new(tag);
                if let Some(style) = alignment_style(*align) {
                    el = el.with_attr("style", style);
                }
                let p = Element::new("p").with_children(inline(cell));
                el.with_children(vec![p.into()]).into()
            })
            .collect();
        Element::new("tr").with_children(cells).into()
    };

    let head = Element::new("thead").with_children(vec![row(&table.header, "th")]);
    let body = Element::new("tbody")
        .with_children(table.rows.iter().map(|r| row(r, "td")).collect());
    Element::new("table").with_children(vec![head.into(), body.into()])
}

fn alignment_style(align: Alignment) -> Option<&'static str> {
    match align {
        Alignment::Left => None,
        Alignment::Center => Some("text-align: center"),
        Alignment::Right => Some("text-align: right"),
    }
}

fn lines_with_breaks(lines: &[String]) -> Vec<Node> {
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(Element::new("br").into());
        }
        out.extend(inline(line));
    }
    out
}

/// Parses and renders the inline content of one unit.
fn inline(text: &str) -> Vec<Node> {
    render_inline(text, &parse_inline(0, text))
}

fn render_inline(src: &str, nodes: &[InlineNode]) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::Text(sp) | InlineNode::Escaped(sp) => text_node(sp.slice(src)),
            InlineNode::CodeSpan { inner, .. } => Element::new("code")
                .with_children(vec![Node::text(encode_text(inner.slice(src)))])
                .into(),
            InlineNode::Link { text, url, .. } => Element::new("a")
                .with_attr("href", &decode_html_entities(url.slice(src)))
                .with_children(render_inline(src, text))
                .into(),
            InlineNode::Emphasis { children, .. } => Element::new("em")
                .with_children(render_inline(src, children))
                .into(),
            InlineNode::Strong { children, .. } => Element::new("strong")
                .with_children(render_inline(src, children))
                .into(),
        })
        .collect()
}

/// Raw Markdown text becomes escaped HTML text; entities written in the
/// source are honoured, raw tags are not.
fn text_node(raw: &str) -> Node {
    Node::text(encode_text(&decode_html_entities(raw)))
}
