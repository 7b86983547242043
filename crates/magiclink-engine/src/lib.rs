//! Bare URL and email autolinking for a small Markdown pipeline.
//!
//! The core lives in [`magiclink`]: two linear-time matchers, the link
//! builder and [`MagicLinkExtension`], which installs them into an
//! [`InlineRegistry`]. The rest of the crate is the host those rules run in:
//! a block splitter ([`parsing`]), an ordered inline rule pipeline
//! ([`inline`]) and an HTML renderer ([`render`]), tied together by
//! [`Markdown`].

pub mod config;
pub mod inline;
pub mod magiclink;
pub mod markdown;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use config::LinkConfig;
pub use inline::{Extension, InlineNode, InlineRegistry, InlineRule, Location, RegistryError};
pub use magiclink::{
    EmailMatcher, LinkBuilder, LinkNode, MagicLinkExtension, MatchSpan, UrlMatcher, find_links,
    sanitize_href,
};
pub use markdown::Markdown;
pub use parsing::{Block, Span};
