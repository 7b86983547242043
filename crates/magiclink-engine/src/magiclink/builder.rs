use crate::config::LinkConfig;

use super::sanitize::sanitize_href;
use super::types::{LinkNode, MatchSpan};

const SCHEME_SEPARATOR: &str = "://";

/// Turns matches into anchors according to a [`LinkConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkBuilder {
    config: LinkConfig,
}

impl LinkBuilder {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LinkConfig {
        self.config
    }

    /// Anchor for a URL match. `www.` matches get an `http://` href; with
    /// `hide_protocol`, scheme-prefixed matches drop `scheme://` from the
    /// display text only.
    ///
    /// Returns `None` when the match or the cleaned href is empty.
    pub fn url_link(&self, m: &MatchSpan<'_>) -> Option<LinkNode> {
        if m.raw_text.is_empty() {
            return None;
        }

        let href = if m.is_www_form {
            format!("http://{}", m.raw_text)
        } else {
            m.raw_text.to_string()
        };

        let display = if self.config.hide_protocol && !m.is_www_form {
            match m.raw_text.split_once(SCHEME_SEPARATOR) {
                Some((_, rest)) => rest,
                None => m.raw_text,
            }
        } else {
            m.raw_text
        };

        LinkNode::new(sanitize_href(&href), display.to_string())
    }

    /// Anchor for an email match: `mailto:` href, display unchanged.
    pub fn email_link(&self, m: &MatchSpan<'_>) -> Option<LinkNode> {
        if m.raw_text.is_empty() {
            return None;
        }
        LinkNode::new(
            sanitize_href(&format!("mailto:{}", m.raw_text)),
            m.raw_text.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::span::Span;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn span(raw: &str, www: bool) -> MatchSpan<'_> {
        MatchSpan::new(Span::new(0, raw.len()), raw, www)
    }

    #[rstest]
    #[case(false, "http://example.com", false, "http://example.com", "http://example.com")]
    #[case(true, "http://example.com", false, "http://example.com", "example.com")]
    #[case(true, "ftps://files.example.com/x", false, "ftps://files.example.com/x", "files.example.com/x")]
    #[case(false, "www.example.com/path", true, "http://www.example.com/path", "www.example.com/path")]
    #[case(true, "www.example.com/path", true, "http://www.example.com/path", "www.example.com/path")]
    fn url_links(
        #[case] hide_protocol: bool,
        #[case] raw: &str,
        #[case] www: bool,
        #[case] href: &str,
        #[case] display: &str,
    ) {
        let builder = LinkBuilder::new(LinkConfig::new(hide_protocol));
        let link = builder.url_link(&span(raw, www)).unwrap();
        assert_eq!(link.href(), href);
        assert_eq!(link.display_text(), display);
    }

    #[test]
    fn href_is_sanitized_display_is_not() {
        let builder = LinkBuilder::default();
        let link = builder.url_link(&span("http://example.com/\"q\"", false)).unwrap();
        assert_eq!(link.href(), "http://example.com/%22q%22");
        assert_eq!(link.display_text(), "http://example.com/\"q\"");
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn email_ignores_hide_protocol(#[case] hide_protocol: bool) {
        let builder = LinkBuilder::new(LinkConfig::new(hide_protocol));
        let link = builder.email_link(&span("user@example.com", false)).unwrap();
        assert_eq!(link.href(), "mailto:user@example.com");
        assert_eq!(link.display_text(), "user@example.com");
    }

    #[test]
    fn empty_match_is_no_link() {
        let builder = LinkBuilder::default();
        assert_eq!(builder.url_link(&span("", false)), None);
        assert_eq!(builder.email_link(&span("", false)), None);
    }
}
