//! # HTML Fragment Tree
//!
//! A minimal element/text/comment tree shared by the Markdown emitter and the
//! artifact sanitizer.
//!
//! ## Modules
//!
//! - **`node`**: `Node`/`Element` types and serialization
//! - **`lexer`**: Logos-based tokenizer for HTML fragments
//! - **`parser`**: tolerant tree builder over lexer tokens
//!
//! Text nodes hold HTML source text (already escaped), so serializing a parsed
//! fragment reproduces its bytes apart from tag-name case, implied end tags and
//! removed nodes.

pub mod lexer;
pub mod node;
pub mod parser;

pub use node::{Element, Node, serialize};
pub use parser::parse_fragment;

/// Zero-width characters editors leave behind in otherwise empty content.
const INVISIBLE: [char; 3] = ['\u{200b}', '\u{200d}', '\u{feff}'];

/// Whether `text` is empty once entities are decoded and whitespace,
/// non-breaking spaces and zero-width characters are discounted.
pub fn is_blank_text(text: &str) -> bool {
    html_escape::decode_html_entities(text)
        .chars()
        .all(|c| c.is_whitespace() || INVISIBLE.contains(&c))
}
