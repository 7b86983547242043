use std::sync::LazyLock;

use regex::Regex;

use crate::inline::{InlineNode, InlineRule, Replacement};

static HARD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]{2,}\n").expect("valid line break pattern"));

/// Two or more spaces before a newline become a hard line break.
pub struct LineBreakRule;

impl LineBreakRule {
    pub const NAME: &'static str = "line_break";

    pub fn new() -> Self {
        Self
    }
}

impl Default for LineBreakRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRule for LineBreakRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        HARD_BREAK
            .find_iter(text)
            .map(|m| Replacement::node(m.into(), InlineNode::LineBreak))
            .collect()
    }
}
