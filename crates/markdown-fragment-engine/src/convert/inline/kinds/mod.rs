//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[text](url)` brackets and parentheses
//! - **`Emphasis`**: `*`/`_` delimiter runs and their flanking rules
//! - **`Escape`**: `\` before ASCII punctuation
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;
