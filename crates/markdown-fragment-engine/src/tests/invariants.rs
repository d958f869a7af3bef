use crate::html::{Element, Node, is_blank_text, parse_fragment};

/// Tags the converter may emit.
const ALLOWED: [&str; 21] = [
    "h1", "h2", "h3", "p", "br", "strong", "em", "code", "pre", "blockquote", "hr", "a", "ul",
    "ol", "li", "table", "thead", "tbody", "tr", "th", "td",
];

const TRANSPARENT: [&str; 9] = ["p", "span", "strong", "em", "b", "i", "u", "s", "br"];

/// Validates converter output invariants.
///
/// Asserts that:
/// - Only tags from the output tag set appear
/// - No `li` is blank and every `ul`/`ol` holds at least one `li`
/// - Every table has one header row and body rows of the header's width
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(html: &str) {
    for node in &parse_fragment(html) {
        check_node(node, html);
    }
}

fn check_node(node: &Node, html: &str) {
    let Node::Element(el) = node else {
        return;
    };
    assert!(
        ALLOWED.contains(&el.name.as_str()),
        "unexpected <{}> in output: {html}",
        el.name
    );
    match el.name.as_str() {
        "li" => assert!(!renders_blank(&el.children), "blank <li> in output: {html}"),
        "ul" | "ol" => {
            assert!(
                el.children.iter().any(|c| is_element(c, "li")),
                "<{}> without items in output: {html}",
                el.name
            );
            for child in &el.children {
                match child {
                    Node::Element(li) => assert!(li.is("li"), "<{}> directly in list: {html}", li.name),
                    Node::Text(t) => assert!(is_blank_text(t), "text directly in list: {html}"),
                    Node::Comment(_) => {}
                }
            }
        }
        "table" => check_table(el, html),
        _ => {}
    }
    for child in &el.children {
        check_node(child, html);
    }
}

fn check_table(table: &Element, html: &str) {
    let sections: Vec<&Element> = table.children.iter().filter_map(Node::as_element).collect();
    assert!(
        matches!(sections.as_slice(), [head, body] if head.is("thead") && body.is("tbody")),
        "table must hold thead then tbody: {html}"
    );
    let header_rows = rows(sections[0]);
    assert_eq!(header_rows.len(), 1, "table needs exactly one header row: {html}");
    let width = cells(header_rows[0], "th");
    assert!(width > 0, "empty header row: {html}");
    for row in rows(sections[1]) {
        assert_eq!(cells(row, "td"), width, "ragged body row: {html}");
    }
}

fn rows(section: &Element) -> Vec<&Element> {
    section
        .children
        .iter()
        .filter_map(Node::as_element)
        .filter(|el| el.is("tr"))
        .collect()
}

fn cells(row: &Element, tag: &str) -> usize {
    row.children.iter().filter(|c| is_element(c, tag)).count()
}

fn is_element(node: &Node, name: &str) -> bool {
    node.as_element().is_some_and(|el| el.is(name))
}

fn renders_blank(nodes: &[Node]) -> bool {
    nodes.iter().all(|node| match node {
        Node::Text(t) => is_blank_text(t),
        Node::Comment(_) => true,
        Node::Element(el) => TRANSPARENT.contains(&el.name.as_str()) && renders_blank(&el.children),
    })
}
