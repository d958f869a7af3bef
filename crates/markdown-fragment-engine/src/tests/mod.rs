//! Pipeline-level tests for Markdown conversion and sanitizing.
//!
//! Every converted document is run through [`invariants::check`].

mod invariants;

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

use crate::{
    Sections,
    convert::{blocks::Block, convert_sections_to_html, markdown_to_html, parse_document},
    html::{Node, is_blank_text, parse_fragment},
    sanitize_html,
};

/// Creates an empty sections directory that is removed on drop.
pub fn create_test_sections_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates a file below `dir`, including missing parent directories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn convert(md: &str) -> String {
    let html = markdown_to_html(md);
    invariants::check(&html);
    html
}

#[test]
fn table_round_trip() {
    assert_eq!(
        convert("A|B\n-|-\n1|2\n3|4"),
        concat!(
            "<table><thead><tr><th><p>A</p></th><th><p>B</p></th></tr></thead>",
            "<tbody><tr><td><p>1</p></td><td><p>2</p></td></tr>",
            "<tr><td><p>3</p></td><td><p>4</p></td></tr></tbody></table>",
        )
    );
}

#[rstest]
#[case::blank_between_items("- a\n\n- b", "<ul><li>a</li><li>b</li></ul>")]
#[case::marker_only_line("- a\n-\n- b", "<ul><li>a</li><li>b</li></ul>")]
#[case::blank_item_content("- a\n- &nbsp;\n- b", "<ul><li>a</li><li>b</li></ul>")]
#[case::only_empty_items("-\n- &nbsp;\n*", "")]
#[case::family_switch("- a\n1. b", "<ul><li>a</li></ul>\n<ol><li>b</li></ol>")]
#[case::ordered_start("3. c\n\n4. d", "<ol start=\"3\"><li>c</li><li>d</li></ol>")]
#[case::unicode_bullets("• a\n◦ b\n▪ c\n▸ d", "<ul><li>a</li><li>b</li><li>c</li><li>d</li></ul>")]
#[case::prose_ends_list("- a\ntext", "<ul><li>a</li></ul>\n<p>text</p>")]
fn list_processing(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(convert(md), expected);
}

#[rstest]
#[case::strong_and_em("**bold** *italic*", "<p><strong>bold</strong> <em>italic</em></p>")]
#[case::triple_run("***x***", "<p><strong><em>x</em></strong></p>")]
#[case::underscores("__a__ _b_", "<p><strong>a</strong> <em>b</em></p>")]
#[case::intraword_underscore("snake_case_name", "<p>snake_case_name</p>")]
#[case::code_span("`**raw**`", "<p><code>**raw**</code></p>")]
#[case::link("[terms](https://a.test/t)", "<p><a href=\"https://a.test/t\">terms</a></p>")]
#[case::raw_html("<b>hi</b>", "<p>&lt;b&gt;hi&lt;/b&gt;</p>")]
fn inline_conversion(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(convert(md), expected);
}

#[test]
fn emphasis_is_never_a_rule() {
    let html = convert("***x***\n\n***");
    assert_eq!(html, "<p><strong><em>x</em></strong></p>\n<hr>");
    assert!(!html.contains('*'));
}

#[test]
fn table_without_separator_is_text() {
    assert_eq!(convert("a | b\nc | d"), "<p>a | b<br>c | d</p>");
}

#[test]
fn lone_colon_separator_cell_is_left_aligned() {
    let html = convert("h|i\n:|---\nx|y");
    assert!(html.starts_with("<table>"), "{html}");
    assert!(!html.contains("text-align"), "{html}");
}

#[test]
fn unclosed_links_stay_text() {
    let md = "[a](".repeat(5000);
    assert_eq!(convert(&md), format!("<p>{md}</p>"));
}

#[rstest]
#[case("[x](javascript:alert(1))", "<p>[x](javascript:alert(1))</p>")]
#[case("[x](javascript&#58;alert(1))", "<p>[x](javascript:alert(1))</p>")]
#[case("[x](https://a.test)", "<p><a href=\"https://a.test\">x</a></p>")]
#[case("[x](guide.html#top)", "<p><a href=\"guide.html#top\">x</a></p>")]
fn only_safe_link_schemes_become_anchors(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(convert(md), expected);
}

#[test]
fn pipes_in_code_stay_code() {
    assert_eq!(
        convert("```\n| a | b |\n|---|---|\n```"),
        "<pre><code>| a | b |\n|---|---|</code></pre>"
    );
}

#[test]
fn separate_quotes_stay_separate() {
    assert_eq!(
        convert("> a\n\n> b"),
        "<blockquote><p>a</p></blockquote>\n<blockquote><p>b</p></blockquote>"
    );
}

#[test]
fn headings_clamp_to_h3() {
    assert_eq!(convert("#### Deep"), "<h3>Deep</h3>");
}

#[test]
fn crlf_input_converts_like_lf() {
    assert_eq!(convert("- a\r\n\r\n- b\r\n"), convert("- a\n\n- b\n"));
}

#[test]
fn whole_document() {
    let md = "# Scope of Work\n\nThe contractor will deliver:\n\n- Design review\n- **Final** report\n\n1. Kick-off\n2. Delivery\n\n| Item | Cost |\n|:-----|-----:|\n| A | 10 |\n\n> Note: fees are *fixed*.\n\n---\n";
    insta::assert_snapshot!(convert(md), @r#"
    <h1>Scope of Work</h1>
    <p>The contractor will deliver:</p>
    <ul><li>Design review</li><li><strong>Final</strong> report</li></ul>
    <ol><li>Kick-off</li><li>Delivery</li></ol>
    <table><thead><tr><th><p>Item</p></th><th style="text-align: right"><p>Cost</p></th></tr></thead><tbody><tr><td><p>A</p></td><td style="text-align: right"><p>10</p></td></tr></tbody></table>
    <blockquote><p>Note: fees are <em>fixed</em>.</p></blockquote>
    <hr>
    "#);
}

#[test]
fn parse_document_exposes_blocks() {
    let doc = parse_document("# T\n\n- a\n\nA|B\n-|-\n1|2");
    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::List(_) => "list",
            Block::Table(_) => "table",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["heading", "list", "table"]);
}

#[test]
fn sections_convert_element_wise() {
    let sections: Sections = [
        ("b-scope".to_string(), "- a\n\n- b".to_string()),
        ("a-intro".to_string(), "Hello".to_string()),
    ]
    .into_iter()
    .collect();

    let html = convert_sections_to_html(&sections);

    assert_eq!(html.len(), 2);
    assert_eq!(html["a-intro"], "<p>Hello</p>");
    assert_eq!(html["b-scope"], "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn converted_output_is_already_sanitized() {
    let html = convert("- a\n- *&nbsp;*\n\n1. `x`");
    assert_eq!(sanitize_html(&html), html);
}

/// Markdown-ish documents built from lines the converter has rules for.
fn markdown_doc() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        Just("1.".to_string()),
        Just("- &nbsp;".to_string()),
        Just("- *&nbsp;*".to_string()),
        Just("|a|b|".to_string()),
        Just("|-|:-:|".to_string()),
        Just("x | y | z".to_string()),
        Just("> quote".to_string()),
        Just(">".to_string()),
        Just("```".to_string()),
        Just("# head".to_string()),
        Just("***".to_string()),
        "[a-z]{1,6}".prop_map(|w| format!("- {w}")),
        "[a-z]{1,6}".prop_map(|w| format!("2. *{w}*")),
        "[a-z *_`\\[\\]()]{0,12}",
    ];
    prop::collection::vec(line, 0..24).prop_map(|lines| lines.join("\n"))
}

/// HTML fragments shaped like editor output, including its artifacts.
fn html_fragment() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("&nbsp;".to_string()),
        Just("\u{a0}".to_string()),
        Just("\u{200b}".to_string()),
        Just("<br>".to_string()),
        Just("<br class=\"ProseMirror-trailingBreak\">".to_string()),
        Just("<img class=\"ProseMirror-separator\">".to_string()),
        Just("<!-- c -->".to_string()),
        Just("<".to_string()),
        Just("</li>".to_string()),
        Just("&nb".to_string()),
        Just("sp;".to_string()),
        "[a-z]{1,3}",
    ];
    let bare_list = (
        prop::sample::select(vec!["ul", "ol"]),
        prop::sample::select(vec!["<br>", "<p></p>", " ", "<span>&nbsp;</span>", "\n<br>\n"]),
    )
        .prop_map(|(tag, leaf)| format!("<{tag}>{leaf}</{tag}>"));
    let leaf = prop_oneof![4 => leaf, 1 => bare_list];
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::sample::select(vec!["ul", "ol", "li", "p", "strong", "span", "em"]),
            prop::collection::vec(inner, 0..4),
            any::<bool>(),
        )
            .prop_map(|(tag, children, closed)| {
                let close = if closed { format!("</{tag}>") } else { String::new() };
                format!("<{tag}>{}{close}", children.concat())
            })
    })
}

/// Every surviving `ul`/`ol` holds an item or some visible text.
fn lists_hold_content(nodes: &[Node]) -> bool {
    fn has_content(nodes: &[Node]) -> bool {
        nodes.iter().any(|node| match node {
            Node::Text(text) => !is_blank_text(text),
            Node::Element(el) => {
                el.is("li") || el.is("ul") || el.is("ol") || has_content(&el.children)
            }
            Node::Comment(_) => false,
        })
    }
    nodes.iter().all(|node| match node {
        Node::Element(el) => {
            let is_list = el.is("ul") || el.is("ol");
            (!is_list || has_content(&el.children)) && lists_hold_content(&el.children)
        }
        _ => true,
    })
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(parts in prop::collection::vec(html_fragment(), 0..4)) {
        let input = parts.concat();
        let once = sanitize_html(&input);
        prop_assert!(lists_hold_content(&parse_fragment(&once)), "{once}");
        prop_assert_eq!(sanitize_html(&once), once);
    }

    #[test]
    fn converter_output_keeps_invariants(md in markdown_doc()) {
        let html = markdown_to_html(&md);
        invariants::check(&html);
        prop_assert_eq!(sanitize_html(&html), html);
    }

    #[test]
    fn blank_lines_never_split_a_list(
        items in prop::collection::vec(("[a-z]{1,8}", 0usize..4), 1..8)
    ) {
        let md: String = items
            .iter()
            .map(|(word, blanks)| format!("- {word}\n{}", "\n".repeat(*blanks)))
            .collect();
        let html = markdown_to_html(&md);
        prop_assert_eq!(html.matches("<ul>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
    }
}
