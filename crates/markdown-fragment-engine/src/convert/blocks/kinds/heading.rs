/// ATX heading (`# Title`) with owned delimiter constant.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deepest level the output fragment supports; deeper headings clamp here.
    pub const MAX_LEVEL: u8 = 3;

    /// Parses `## Title ##` into `(2, "Title")`.
    ///
    /// Returns `None` for lines that are not headings, including a marker run
    /// with no text after it.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let hashes = t.len() - t.trim_start_matches(Self::MARKER).len();
        if hashes == 0 || hashes > 6 {
            return None;
        }
        let rest = &t[hashes..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let text = rest.trim();
        let text = match text.trim_end_matches(Self::MARKER) {
            // Closing run must be separated from the text by whitespace.
            stripped if stripped.len() < text.len() && stripped.ends_with([' ', '\t']) => {
                stripped.trim_end()
            }
            stripped if stripped.is_empty() => stripped,
            _ => text,
        };
        if text.is_empty() {
            return None;
        }
        Some(((hashes as u8).min(Self::MAX_LEVEL), text))
    }
}
