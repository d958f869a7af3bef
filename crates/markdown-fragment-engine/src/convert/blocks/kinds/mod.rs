//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. Classifier and
//! builder code call into these; they never hardcode `>`, ```` ``` ```` or
//! list markers themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod rule;
pub mod table_row;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use list_marker::{ListKind, ListMarker};
pub use rule::Rule;
pub use table_row::{Alignment, TableRow};
