use super::{
    lexer::{TokenKind, lex, split_tag},
    node::{Element, Node},
};

/// Parses an HTML fragment into a node tree. Never fails.
///
/// - void and `/>` elements take no children
/// - an `<li>` opening directly inside an open `<li>` closes it first
/// - an end tag closes everything up to its matching open element
/// - an end tag with no open match is kept as text
/// - elements still open at end of input are closed there
///
/// A `<` that does not start a tag is written back as `&lt;`, so text can
/// never combine with neighbouring text into a new tag once nodes between
/// them are removed.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::default();
    for token in lex(input) {
        match token.kind {
            TokenKind::Text => builder.push_text(&escape_lt(token.text)),
            TokenKind::Lt => builder.push_text("&lt;"),
            TokenKind::Comment => builder.push_node(Node::Comment(token.text.to_string())),
            TokenKind::StartTag => {
                let (name, attrs) = split_tag(token.text);
                builder.open(name, attrs);
            }
            TokenKind::EndTag => {
                let (name, _) = split_tag(token.text);
                if !builder.close(&name) {
                    builder.push_text(&escape_lt(token.text));
                }
            }
        }
    }
    builder.finish()
}

fn escape_lt(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('<') {
        text.replace('<', "&lt;").into()
    } else {
        text.into()
    }
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Element>,
    root: Vec<Node>,
}

impl TreeBuilder {
    fn children(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(el) => &mut el.children,
            None => &mut self.root,
        }
    }

    fn push_node(&mut self, node: Node) {
        self.children().push(node);
    }

    fn push_text(&mut self, text: &str) {
        let children = self.children();
        if let Some(Node::Text(prev)) = children.last_mut() {
            prev.push_str(text);
        } else {
            children.push(Node::text(text));
        }
    }

    fn open(&mut self, name: String, attrs: &str) {
        let mut el = Element::new(&name);
        el.attrs = attrs.to_string();

        if el.is("li") && self.innermost_list_context_is_item() {
            self.close("li");
        }
        if el.is_void() || el.is_self_closing() {
            self.push_node(el.into());
        } else {
            self.stack.push(el);
        }
    }

    fn innermost_list_context_is_item(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|el| el.is("li") || el.is("ul") || el.is("ol"))
            .is_some_and(|el| el.is("li"))
    }

    /// Closes the innermost open element named `name` and everything above
    /// it. Returns false if no such element is open.
    fn close(&mut self, name: &str) -> bool {
        let Some(idx) = self.stack.iter().rposition(|el| el.is(name)) else {
            return false;
        };
        while self.stack.len() > idx {
            self.pop();
        }
        true
    }

    fn pop(&mut self) {
        if let Some(el) = self.stack.pop() {
            self.push_node(el.into());
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            self.pop();
        }
        self.root
    }
}
