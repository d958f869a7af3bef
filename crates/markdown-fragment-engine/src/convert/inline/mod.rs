//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of one inline-eligible unit at a time: a
//! heading, a paragraph line, a list item, a quote line or a table cell. It
//! never crosses a line, matching the scope of the block grammar.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Escapes, then code spans (raw zone), then links, then emphasis runs. A
//! `**` run that fails to pair is consumed whole, so it is never re-read as
//! two single `*` delimiters.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
