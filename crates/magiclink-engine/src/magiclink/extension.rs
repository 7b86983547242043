use crate::config::LinkConfig;
use crate::inline::rules::TextRule;
use crate::inline::{
    Extension, InlineNode, InlineRegistry, InlineRule, Location, RegistryError, Replacement,
};

use super::builder::LinkBuilder;
use super::email::EmailMatcher;
use super::types::{LinkNode, MatchSpan};
use super::url::UrlMatcher;

/// Inline rule turning bare URLs into links.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicLinkRule {
    builder: LinkBuilder,
}

impl MagicLinkRule {
    pub const NAME: &'static str = "magic-link";

    pub fn new(config: LinkConfig) -> Self {
        Self {
            builder: LinkBuilder::new(config),
        }
    }
}

impl InlineRule for MagicLinkRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        UrlMatcher
            .find_iter(text)
            .filter_map(|m| {
                let link = self.builder.url_link(&m)?;
                log::trace!("url {:?} at {:?}", m.raw_text, m.span);
                Some(Replacement::node(m.span, InlineNode::Link(link)))
            })
            .collect()
    }
}

/// Inline rule turning bare email addresses into `mailto:` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicMailRule {
    builder: LinkBuilder,
}

impl MagicMailRule {
    pub const NAME: &'static str = "magic-mail";

    pub fn new(config: LinkConfig) -> Self {
        Self {
            builder: LinkBuilder::new(config),
        }
    }
}

impl InlineRule for MagicMailRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        EmailMatcher
            .find_iter(text)
            .filter_map(|m| {
                let link = self.builder.email_link(&m)?;
                log::trace!("email {:?} at {:?}", m.raw_text, m.span);
                Some(Replacement::node(m.span, InlineNode::Link(link)))
            })
            .collect()
    }
}

/// Installs [`MagicLinkRule`] and [`MagicMailRule`], in that order, right
/// before the plain-text fallback.
///
/// Emphasis and strong have already run at that point, so a URL inside
/// `*...*` is found in the container's inner text and can never swallow the
/// closing delimiter. Those rules never open a pair inside a URL, so paths
/// like `/Lib/__init__.py` reach this rule whole. Code spans and escapes are
/// placeholders by then and are never searched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicLinkExtension {
    config: LinkConfig,
}

impl MagicLinkExtension {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LinkConfig {
        self.config
    }
}

impl Extension for MagicLinkExtension {
    fn extend(&self, registry: &mut InlineRegistry) -> Result<(), RegistryError> {
        registry.insert(MagicLinkRule::new(self.config), Location::Before(TextRule::NAME))?;
        registry.insert(MagicMailRule::new(self.config), Location::Before(TextRule::NAME))?;
        Ok(())
    }
}

/// Every link in one raw text run, without a registry.
///
/// URLs win over addresses they contain; the result is disjoint and ordered
/// by start offset.
pub fn find_links<'t>(text: &'t str, config: LinkConfig) -> Vec<(MatchSpan<'t>, LinkNode)> {
    let builder = LinkBuilder::new(config);

    let mut found: Vec<(MatchSpan<'t>, LinkNode)> = UrlMatcher
        .find_iter(text)
        .filter_map(|m| builder.url_link(&m).map(|link| (m, link)))
        .collect();

    let emails: Vec<_> = EmailMatcher
        .find_iter(text)
        .filter(|m| !found.iter().any(|(url, _)| url.span.overlaps(m.span)))
        .filter_map(|m| builder.email_link(&m).map(|link| (m, link)))
        .collect();

    found.extend(emails);
    found.sort_by_key(|(m, _)| m.span.start);
    found
}
