use crate::inline::stash::raw_runs;
use crate::inline::{InlineNode, InlineRule, Replacement};

/// Plain-text fallback: claims every run that is still raw.
///
/// Always last in the default registry. Anything registered after it only
/// ever sees placeholders, so rules that must see text (such as link
/// detection) go `Before(TextRule::NAME)`.
pub struct TextRule;

impl TextRule {
    pub const NAME: &'static str = "text";
}

impl InlineRule for TextRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        raw_runs(text)
            .into_iter()
            .map(|span| {
                let raw = &text[span.start..span.end];
                Replacement::node(span, InlineNode::Text(raw.to_string()))
            })
            .collect()
    }
}
