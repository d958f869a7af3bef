use std::sync::LazyLock;

use regex::Regex;

/// Column alignment derived from `:` placement in a separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// `:---:` is center, `---:` is right, everything else is left. A lone
    /// `:` carries no dashes and stays left.
    pub fn from_separator_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.len() < 2 {
            return Alignment::Left;
        }
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// Pipe-delimited table row syntax (GFM style).
pub struct TableRow;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|?\s*[-:][-:\s|]*$").expect("table separator regex is valid")
});

impl TableRow {
    pub const PIPE: char = '|';
    const ESCAPED_PIPE: &'static str = "\\|";

    /// Whether the line can take part in a table run: it carries at least
    /// one pipe and something besides it.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() > 1 && t.contains(Self::PIPE)
    }

    /// Whether the line is a separator row (`|---|:--:|`). It must carry a
    /// `-` and a pipe; a bare `---` is a rule, not a separator.
    pub fn is_separator(line: &str) -> bool {
        let t = line.trim();
        Self::is_row(t) && t.contains('-') && SEPARATOR.is_match(t)
    }

    /// Splits a row into trimmed cell strings.
    ///
    /// One leading and one trailing pipe are optional. `\|` is a literal pipe
    /// inside a cell.
    pub fn cells(line: &str) -> Vec<String> {
        let mut s = line.trim();
        if let Some(stripped) = s.strip_prefix(Self::PIPE) {
            s = stripped;
        }
        if s.ends_with(Self::PIPE) && !s.ends_with(Self::ESCAPED_PIPE) {
            s = &s[..s.len() - 1];
        }

        let mut cells = Vec::new();
        let mut current = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    current.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut current).trim().to_string()),
                _ => current.push(c),
            }
        }
        cells.push(current.trim().to_string());
        cells
    }

    pub fn alignments(separator: &str) -> Vec<Alignment> {
        Self::cells(separator)
            .iter()
            .map(|c| Alignment::from_separator_cell(c))
            .collect()
    }
}
