use crate::parsing::span::Span;

/// A located match in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'t> {
    /// Where `raw_text` sits in the scanned text.
    pub span: Span,
    /// The exact matched substring.
    pub raw_text: &'t str,
    /// True only for the bare `www.` form, which has no scheme of its own.
    pub is_www_form: bool,
}

impl<'t> MatchSpan<'t> {
    pub fn new(span: Span, raw_text: &'t str, is_www_form: bool) -> Self {
        Self {
            span,
            raw_text,
            is_www_form,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// An anchor built from a match.
///
/// Only [`LinkBuilder`](super::LinkBuilder) creates these, which guarantees
/// both fields are non-empty and `href` has been through
/// [`sanitize_href`](super::sanitize_href).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkNode {
    href: String,
    display_text: String,
}

impl LinkNode {
    pub(crate) fn new(href: String, display_text: String) -> Option<Self> {
        if href.is_empty() || display_text.is_empty() {
            return None;
        }
        Some(Self { href, display_text })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}
