//! # Inline Processing
//!
//! An ordered, per-session list of named inline rules applied to one text
//! run at a time.
//!
//! ## Architecture
//!
//! The processor applies each rule to a *working text*. When a rule matches,
//! the matched span is moved into a stash and replaced by an opaque
//! placeholder. Later rules therefore:
//!
//! - still see delimiters on both sides of an earlier match (`*a `b` c*` pairs)
//! - never see inside a finished node (code spans, escapes, links)
//!
//! Strong/emphasis matches are containers: their inner text stays raw and
//! keeps flowing through the remaining rules, which is how `*http://x.com*`
//! ends up as a link inside emphasis instead of a link that swallowed the
//! closing `*`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, Code, Strong, Emphasis, Link, LineBreak)
//! - **`rule`**: `InlineRule` trait and the `Replacement` a rule returns
//! - **`registry`**: `InlineRegistry`, `Location`, `Extension`, `RegistryError`
//! - **`rules`**: builtin rules (backtick, escape, delimiters, line break, text)
//! - **`processor`**: `process()` entry point
//! - **`scan`**: lookaround emulation for `regex` patterns
//! - **`stash`**: placeholder bookkeeping

pub mod processor;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod scan;
mod stash;
pub mod types;

pub use processor::process;
pub use registry::{Extension, InlineRegistry, Location, RegistryError};
pub use rule::{ContainerKind, InlineRule, Produced, Replacement};
pub use stash::{ETX, STX};
pub use types::{InlineNode, links_in};
