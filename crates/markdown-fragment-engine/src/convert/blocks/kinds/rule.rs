/// Horizontal rule: a line made only of three or more identical `-`, `*` or `_`.
///
/// Lines such as `***bold***` are never rules because they carry other
/// characters; they reach the inline parser as emphasis instead.
pub struct Rule;

impl Rule {
    pub const CHARS: [char; 3] = ['-', '*', '_'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first) && t.len() >= 3 && t.chars().all(|c| c == first)
    }
}
