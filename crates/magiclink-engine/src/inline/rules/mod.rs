//! # Builtin Inline Rules
//!
//! Each rule owns its delimiters and its name; the registry only knows the
//! names. Default order (see [`InlineRegistry::with_defaults`]):
//!
//! 1. **`backtick`**: code spans, a raw zone nothing else looks into
//! 2. **`escape`**: `\*` and friends become literal text
//! 3. **`not_strong`**: a lone `*` or `_` between spaces stays literal
//! 4. **`strong`**, **`strong2`**: `**x**`, `__x__`
//! 5. **`emphasis`**, **`emphasis2`**: `*x*`, `_x_`
//! 6. **`line_break`**: two spaces before a newline
//! 7. **`text`**: everything still raw becomes `Text`; rules after it see nothing
//!
//! [`InlineRegistry::with_defaults`]: super::InlineRegistry::with_defaults

pub mod code_span;
pub mod delimiter;
pub mod escape;
pub mod line_break;
pub mod text;

pub use code_span::CodeSpanRule;
pub use delimiter::{DelimiterRule, NotStrongRule};
pub use escape::EscapeRule;
pub use line_break::LineBreakRule;
pub use text::TextRule;
