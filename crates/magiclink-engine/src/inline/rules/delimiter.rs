use std::sync::LazyLock;

use regex::Regex;

use crate::inline::scan::{BODY, bounded_captures};
use crate::inline::{ContainerKind, InlineNode, InlineRule, Replacement};
use crate::magiclink::UrlMatcher;
use crate::parsing::span::Span;

const INNER: &str = "inner";

// `*` pairs anywhere; `_` pairs only when not touching word characters on
// the outside, so `snake_case_names` and URL paths keep their underscores.
static STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?P<body>\*\*(?P<inner>.+?)\*\*)").expect("valid strong pattern")
});
static STRONG_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:^|\W)(?P<body>__(?P<inner>[^_](?:.*?[^_])??)__)(?:\W|$)")
        .expect("valid strong2 pattern")
});
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<body>\*(?P<inner>[^*]+)\*)").expect("valid emphasis pattern")
});
static EMPHASIS_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:^|\W)(?P<body>_(?P<inner>[^_](?:.*?[^_])??)_)(?:\W|$)")
        .expect("valid emphasis2 pattern")
});
static NOT_STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[ ])(?P<body>[*_])(?:[ ]|$)").expect("valid not_strong pattern")
});

/// A paired-delimiter rule producing a strong or emphasis container.
pub struct DelimiterRule {
    name: &'static str,
    kind: ContainerKind,
    pattern: &'static LazyLock<Regex>,
}

impl DelimiterRule {
    pub fn strong() -> Self {
        Self {
            name: "strong",
            kind: ContainerKind::Strong,
            pattern: &STRONG,
        }
    }

    pub fn strong_underscore() -> Self {
        Self {
            name: "strong2",
            kind: ContainerKind::Strong,
            pattern: &STRONG_UNDERSCORE,
        }
    }

    pub fn emphasis() -> Self {
        Self {
            name: "emphasis",
            kind: ContainerKind::Emphasis,
            pattern: &EMPHASIS,
        }
    }

    pub fn emphasis_underscore() -> Self {
        Self {
            name: "emphasis2",
            kind: ContainerKind::Emphasis,
            pattern: &EMPHASIS_UNDERSCORE,
        }
    }
}

impl InlineRule for DelimiterRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        let urls: Vec<Span> = UrlMatcher.find_iter(text).map(|m| m.span).collect();

        let mut found = Vec::new();
        let mut matches = bounded_captures(self.pattern, text);
        while let Some(caps) = matches.next() {
            let (Some(body), Some(inner)) = (caps.name(BODY), caps.name(INNER)) else {
                continue;
            };

            // A delimiter opening inside a URL belongs to the URL
            let open = body.start();
            if let Some(url) = urls.iter().find(|url| url.start < open && open < url.end) {
                log::trace!("{}: delimiter at {open} is inside URL {url:?}", self.name);
                matches.resume_from((url.end - 1).max(open + 1));
                continue;
            }

            found.push(Replacement::container(
                body.into(),
                self.kind,
                inner.into(),
            ));
        }
        found
    }
}

/// A lone `*` or `_` with spaces (or the run edge) on both sides is literal,
/// so `2 * 3 * 4` never opens emphasis.
pub struct NotStrongRule;

impl NotStrongRule {
    pub const NAME: &'static str = "not_strong";

    pub fn new() -> Self {
        Self
    }
}

impl Default for NotStrongRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for NotStrongRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        bounded_captures(&NOT_STRONG, text)
            .filter_map(|caps| {
                let body = caps.name(BODY)?;
                Some(Replacement::node(
                    Span::from(body),
                    InlineNode::Text(body.as_str().to_string()),
                ))
            })
            .collect()
    }
}
