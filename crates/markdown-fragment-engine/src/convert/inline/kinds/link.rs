use html_escape::decode_html_entities;

pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Destination part of `(url "title")`: the first whitespace-separated
    /// word, with optional `<...>` brackets removed.
    pub fn destination(inner: &str) -> &str {
        let url = inner.split_whitespace().next().unwrap_or("");
        url.strip_prefix('<')
            .and_then(|u| u.strip_suffix('>'))
            .unwrap_or(url)
    }

    /// Schemes a destination may carry. Scheme-less destinations (relative
    /// paths, fragments) are always allowed.
    pub const SAFE_SCHEMES: [&'static str; 4] = ["http", "https", "mailto", "tel"];

    /// Whether the destination may become an `href`. Entities are decoded and
    /// whitespace and control characters dropped before the scheme is read,
    /// matching what a browser would resolve.
    pub fn is_safe(dest: &str) -> bool {
        let cleaned: String = decode_html_entities(dest)
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect();
        match cleaned.split_once(':') {
            // a colon after `/`, `?` or `#` is part of a path, not a scheme
            Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => Self::SAFE_SCHEMES
                .iter()
                .any(|s| scheme.eq_ignore_ascii_case(s)),
            _ => true,
        }
    }
}
