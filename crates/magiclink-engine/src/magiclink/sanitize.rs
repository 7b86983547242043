use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// ASCII that cannot stand raw in an href. Non-ASCII is always encoded. `%`
// is kept so existing escapes are not double-encoded; `&` and `'` are left
// for attribute escaping at render time.
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Minimal href cleanup. Total: every input produces a string, possibly
/// empty.
///
/// Trims surrounding whitespace, decodes character references, drops control
/// characters and percent-encodes whatever is left that cannot appear raw in
/// a URL (spaces, quotes, angle brackets, non-ASCII). This is not an
/// allow-list sanitizer; scheme checks belong to the matchers.
pub fn sanitize_href(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw.trim());
    let cleaned: String = decoded.chars().filter(|c| !c.is_control()).collect();
    utf8_percent_encode(&cleaned, HREF_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://example.com/", "http://example.com/")]
    #[case("  http://example.com/  ", "http://example.com/")]
    #[case("http://example.com/?a=1&amp;b=2", "http://example.com/?a=1&b=2")]
    #[case("http://example.com/a b", "http://example.com/a%20b")]
    #[case("http://example.com/\"x\"", "http://example.com/%22x%22")]
    #[case("http://example.com/<x>", "http://example.com/%3Cx%3E")]
    #[case("http://example.com/{x}|y", "http://example.com/%7Bx%7D%7Cy")]
    #[case("http://example.com/caf\u{e9}", "http://example.com/caf%C3%A9")]
    #[case("http://example.com/%20", "http://example.com/%20")]
    #[case("http://example.com/a\\b^c`d", "http://example.com/a%5Cb%5Ec%60d")]
    #[case("mailto:user+tag@example.com", "mailto:user+tag@example.com")]
    fn cleans(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_href(raw), expected);
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(sanitize_href("http://a.com/\u{7}x\u{0}"), "http://a.com/x");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(sanitize_href(""), "");
        assert_eq!(sanitize_href(" \t\n"), "");
    }
}
