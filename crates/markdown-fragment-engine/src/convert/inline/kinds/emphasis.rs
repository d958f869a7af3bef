/// Emphasis delimiter runs: `*`/`_` (em), `**`/`__` (strong), `***`/`___`
/// (strong wrapping em).
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Longest run that still pairs; longer runs are literal text.
    pub const MAX_RUN: usize = 3;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Whether a run of `delim` between `before` and `after` may open.
    ///
    /// The run must be followed by non-whitespace; an `_` run must also not
    /// sit inside a word.
    pub fn can_open(delim: u8, before: Option<char>, after: Option<char>) -> bool {
        let Some(after) = after else {
            return false;
        };
        if after.is_whitespace() {
            return false;
        }
        !(delim == Self::UNDERSCORE && before.is_some_and(char::is_alphanumeric))
    }

    /// Whether a run of `delim` between `before` and `after` may close.
    pub fn can_close(delim: u8, before: Option<char>, after: Option<char>) -> bool {
        let Some(before) = before else {
            return false;
        };
        if before.is_whitespace() {
            return false;
        }
        !(delim == Self::UNDERSCORE && after.is_some_and(char::is_alphanumeric))
    }
}
