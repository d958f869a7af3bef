pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Only ASCII punctuation can be escaped; `\a` stays literal.
    pub fn escapes(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
