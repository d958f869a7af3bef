//! # Artifact Sanitizer
//!
//! Removes structures the rich-text editor rejects or mangles: empty list
//! items, lists with nothing visible inside, and the placeholder nodes the editor
//! itself inserts on save (`br.ProseMirror-trailingBreak`,
//! `img.ProseMirror-separator`).
//!
//! Pruning is a single bottom-up traversal. Children are pruned before their
//! parent is judged, so an `<li>` that only held an empty `<p>` is seen as
//! empty in the same pass, and an `<ul>` that only held such items goes with
//! it. The result is a fixed point: pruning it again changes nothing.

use crate::html::{Element, Node, is_blank_text, parse_fragment, serialize};

/// Class names of placeholder nodes the editor adds to its own output.
const ARTIFACT_CLASSES: [&str; 2] = ["ProseMirror-trailingBreak", "ProseMirror-separator"];

/// Elements that count as empty when everything inside them is empty.
const TRANSPARENT: [&str; 9] = ["p", "span", "strong", "em", "b", "i", "u", "s", "br"];

/// Sanitizes an HTML fragment.
///
/// `sanitize_html(&sanitize_html(x)) == sanitize_html(x)` for every `x`.
pub fn sanitize_html(html: &str) -> String {
    let mut nodes = parse_fragment(html);
    prune(&mut nodes);
    serialize(&nodes)
}

/// Prunes a node list in place, bottom-up.
pub fn prune(nodes: &mut Vec<Node>) {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            prune(&mut el.children);
        }
    }
    nodes.retain(|node| match node {
        Node::Element(el) => !is_removable(el),
        _ => true,
    });
    merge_text(nodes);
}

/// Joins text nodes left adjacent by a removal, so the parent is judged on
/// the same text a re-parse of the output would see.
fn merge_text(nodes: &mut Vec<Node>) {
    for node in std::mem::take(nodes) {
        if let Node::Text(text) = &node
            && let Some(Node::Text(prev)) = nodes.last_mut()
        {
            prev.push_str(text);
            continue;
        }
        nodes.push(node);
    }
}

/// Items and lists go when nothing visible is left inside. A list holding
/// only line breaks or empty wrappers counts as empty.
fn is_removable(el: &Element) -> bool {
    is_artifact(el) || ((el.is("li") || is_list(el)) && is_blank(&el.children))
}

fn is_artifact(el: &Element) -> bool {
    (el.is("br") || el.is("img")) && ARTIFACT_CLASSES.iter().any(|c| el.has_class(c))
}

fn is_list(el: &Element) -> bool {
    el.is("ul") || el.is("ol")
}

/// True if the nodes render as nothing: blank text, comments, line breaks and
/// transparent wrappers around more of the same.
fn is_blank(nodes: &[Node]) -> bool {
    nodes.iter().all(|node| match node {
        Node::Text(text) => is_blank_text(text),
        Node::Comment(_) => true,
        Node::Element(el) => TRANSPARENT.contains(&el.name.as_str()) && is_blank(&el.children),
    })
}
