//! # Block Parsing
//!
//! Turns pre-sanitized Markdown into a tree of [`Block`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Table extraction** (`table`): maximal runs of pipe rows with a
//!    separator become [`Table`]s before any other rule looks at `|`
//! 2. **Line classification** (`classify`): each remaining line is classified
//!    into a [`LineClass`] from local facts only
//! 3. **Block construction** (`builder`): a [`BlockBuilder`] consumes lines and
//!    tables, tracking the open leaf block and the [`ListState`]
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `List`, `Table`)
//! - **`kinds`**: Block-specific syntax with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`table`**: `extract_tables` splits the line stream into segments
//! - **`list`**: `ListState` transition function and `wrap_list`
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - A line inside a table is never offered to the list processor
//! - Fenced code blocks are raw zones: no block or table detection inside
//! - No emitted [`List`] is empty

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod list;
pub mod table;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use list::{ListEvent, ListState};
pub use table::{Segment, extract_tables};
pub use types::{Block, List, Table};
