use std::sync::LazyLock;

use regex::Regex;

use crate::inline::scan::{BODY, BoundedCaptures, bounded_captures};

use super::types::MatchSpan;

// Dots in the local part and the domain are single and internal. The domain
// needs at least one dot and its last character must be a letter. Neither
// side may touch a word character, `@` or `-`; a leading `/` is also refused
// so addresses inside URL paths are left alone.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        (?:^|[^\w/@\-])
        (?P<body>
            [\w+\-]+(?:\.[\w+\-]+)*
            @
            [\w\-]+\.(?:[\w\-]+\.)*[\w\-]*[a-z]
        )
        (?:$|[^\w@\-])
        ",
    )
    .expect("valid email pattern")
});

/// Finds `local-part@domain` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn find_iter<'t>(&self, text: &'t str) -> EmailMatches<'t> {
        EmailMatches {
            inner: bounded_captures(&EMAIL_PATTERN, text),
        }
    }

    pub fn find<'t>(&self, text: &'t str) -> Option<MatchSpan<'t>> {
        self.find_iter(text).next()
    }
}

pub struct EmailMatches<'t> {
    inner: BoundedCaptures<'static, 't>,
}

impl<'t> Iterator for EmailMatches<'t> {
    type Item = MatchSpan<'t>;

    fn next(&mut self) -> Option<MatchSpan<'t>> {
        let body = self.inner.next()?.name(BODY)?;
        Some(MatchSpan::new(body.into(), body.as_str(), false))
    }
}
