//! # Lexer - Tokenizing HTML Fragments
//!
//! Breaks an HTML fragment into coarse tokens with [Logos]. Every input byte
//! lands in exactly one token, so concatenating token texts gives back the
//! input.
//!
//! [Logos]: https://docs.rs/logos
//!
//! Tokens are context-free: a `Text` run always stops at `<`, so the token
//! stream from any `<` onward does not depend on what came before it. The
//! sanitizer relies on this for idempotence.

use logos::{Lexer, Logos};

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<!-- ... -->`; an unterminated comment runs to end of input.
    #[token("<!--", comment_body)]
    Comment,

    /// `<name attr="v" ...>` or `<name/>`
    #[regex(r#"<[A-Za-z][A-Za-z0-9-]*(?:[^<>"']|"[^"]*"|'[^']*')*>"#)]
    StartTag,

    /// `</name>`
    #[regex(r"</[A-Za-z][A-Za-z0-9-]*[ \t\r\n]*>")]
    EndTag,

    /// Character data up to the next `<`.
    #[regex(r"[^<]+")]
    Text,

    /// A `<` that starts nothing recognizable; treated as text.
    #[token("<")]
    Lt,
}

fn comment_body(lex: &mut Lexer<'_, TokenKind>) {
    let rest = lex.remainder();
    let len = rest.find("-->").map_or(rest.len(), |i| i + 3);
    lex.bump(len);
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Unrecognized input is returned as [`TokenKind::Text`].
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push(Token { kind, text });
    }

    tokens
}

/// Splits the text of a start or end tag into `(lower-case name, attributes)`.
///
/// For `<a href="x">` this is `("a", " href=\"x\"")`.
pub fn split_tag(tag: &str) -> (String, &str) {
    let inner = tag
        .trim_start_matches('<')
        .trim_start_matches('/')
        .strip_suffix('>')
        .unwrap_or(tag);
    let name_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(inner.len());
    (inner[..name_len].to_ascii_lowercase(), &inner[name_len..])
}
