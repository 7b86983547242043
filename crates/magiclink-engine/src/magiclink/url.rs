use std::sync::LazyLock;

use regex::Regex;

use crate::inline::scan::{BODY, BoundedCaptures, bounded_captures};

use super::types::MatchSpan;

const WWW: &str = "www";

// The leading boundary character is consumed outside `body`; it may not be a
// word character, `/`, `@` or `-`, so a URL never starts inside a word,
// another URL's path or an email address.
//
// The path run may contain sentence punctuation but the final character must
// come from the narrower class on the last line, which leaves a trailing
// `.`, `,`, `)` or quote outside the link.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"(?xi)
        (?:^|[^\w/@\-])
        (?P<body>
            (?:
                (?:ht|f)tps?://(?:[a-z0-9][a-z0-9\-_]*(?:\.[a-z0-9\-._]+)+|localhost)
                |
                (?P<www>w{3}\.)[a-z0-9][a-z0-9\-_]*(?:\.[a-z0-9\-._]+)+
            )
            /?[a-z0-9\-._?,!'(){}\[\]/+&@%$\#=:"|~;]*
            [a-z0-9\-_~/\#@$*+=]
        )
        "##,
    )
    .expect("valid URL pattern")
});

/// Finds `http(s)://`, `ftp(s)://` and bare `www.` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlMatcher;

impl UrlMatcher {
    /// Leftmost-first, longest-at-position matches, disjoint and in order.
    pub fn find_iter<'t>(&self, text: &'t str) -> UrlMatches<'t> {
        UrlMatches {
            inner: bounded_captures(&URL_PATTERN, text),
        }
    }

    /// The first match in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<MatchSpan<'t>> {
        self.find_iter(text).next()
    }
}

pub struct UrlMatches<'t> {
    inner: BoundedCaptures<'static, 't>,
}

impl<'t> Iterator for UrlMatches<'t> {
    type Item = MatchSpan<'t>;

    fn next(&mut self) -> Option<MatchSpan<'t>> {
        let caps = self.inner.next()?;
        let body = caps.name(BODY)?;
        Some(MatchSpan::new(
            body.into(),
            body.as_str(),
            caps.name(WWW).is_some(),
        ))
    }
}
