// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **some** content and a [link](https://a.test).\n\n- Bullet point\n\n- Another *item*\n-\n1. First\n2. Second\n\n| Item | Cost |\n|:-----|-----:|\n| A | 10 |\n\n> Quoted text\n\n```rust\nfn example() {}\n```\n\n---\n\n";
    base.repeat(size)
}

/// Worst case for the emphasis pass: many openers that never close.
#[allow(dead_code)]
pub fn generate_unclosed_emphasis(size: usize) -> String {
    "*a _b **c `d [e](".repeat(size)
}

/// Worst case for link destinations: brackets whose parentheses never close.
#[allow(dead_code)]
pub fn generate_unclosed_links(size: usize) -> String {
    "[a](".repeat(size)
}

/// Editor output full of empty items and trailing-break placeholders.
#[allow(dead_code)]
pub fn generate_editor_html(size: usize) -> String {
    let base = "<ul><li><p>item</p></li><li><p><br class=\"ProseMirror-trailingBreak\"></p></li><li>&nbsp;</li></ul><p>text<br class=\"ProseMirror-trailingBreak\"></p>";
    base.repeat(size)
}
