//! # Magic Links
//!
//! Detects bare URLs, `www.` hosts and email addresses in raw inline text and
//! turns each into a [`LinkNode`].
//!
//! - **`url`** / **`email`**: [`UrlMatcher`] and [`EmailMatcher`], linear-time
//!   patterns with boundary checks
//! - **`builder`**: [`LinkBuilder`] decides href and display text
//! - **`sanitize`**: [`sanitize_href`], the minimal href cleanup
//! - **`extension`**: the two inline rules and [`MagicLinkExtension`], which
//!   installs them into an [`InlineRegistry`](crate::inline::InlineRegistry)
//!
//! ```
//! use magiclink_engine::{LinkConfig, magiclink::find_links};
//!
//! let links = find_links("see www.example.com/path.", LinkConfig::default());
//! assert_eq!(links.len(), 1);
//! assert_eq!(links[0].1.href(), "http://www.example.com/path");
//! assert_eq!(links[0].1.display_text(), "www.example.com/path");
//! ```

pub mod builder;
pub mod email;
pub mod extension;
pub mod sanitize;
pub mod types;
pub mod url;

pub use builder::LinkBuilder;
pub use email::EmailMatcher;
pub use extension::{MagicLinkExtension, MagicLinkRule, MagicMailRule, find_links};
pub use sanitize::sanitize_href;
pub use types::{LinkNode, MatchSpan};
pub use url::UrlMatcher;
