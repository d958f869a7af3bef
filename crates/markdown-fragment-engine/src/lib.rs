pub mod convert;
pub mod html;
pub mod io;
pub mod sanitize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{
    ParsedDoc, Sections, convert_sections_to_html, markdown_to_html, parse_document,
};
pub use io::*;
pub use sanitize::sanitize_html;
