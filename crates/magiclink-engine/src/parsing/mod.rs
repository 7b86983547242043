//! # Document Parsing
//!
//! The block layer the inline pipeline runs inside. It only knows two leaf
//! blocks, which is all the rendering CLI needs:
//!
//! - **Paragraphs**: runs of non-blank lines, handed to the inline pipeline
//! - **Fenced code**: ```` ``` ```` / `~~~` blocks, a raw zone where no inline
//!   rule (and so no link detection) ever runs
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges shared by blocks, inline replacements and matches
//! - **`cursor`**: byte `Cursor` used by the hand-written inline scanners
//! - **`blocks`**: `parse_blocks()` line classifier + block builder

pub mod blocks;
pub mod cursor;
pub mod span;

pub use blocks::{Block, FenceKind, parse_blocks};
pub use cursor::Cursor;
pub use span::Span;
