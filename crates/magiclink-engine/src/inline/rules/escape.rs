use crate::inline::{InlineNode, InlineRule, Replacement};
use crate::parsing::{cursor::Cursor, span::Span};

/// Backslash escapes: `\` before ASCII punctuation yields that character as
/// literal text, hidden from the delimiter and link rules.
pub struct EscapeRule;

impl EscapeRule {
    pub const NAME: &'static str = "escape";
    pub const BACKSLASH: u8 = b'\\';
}

impl InlineRule for EscapeRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        let mut cur = Cursor::new(text);
        let mut out = vec![];

        while !cur.eof() {
            if cur.peek() == Some(Self::BACKSLASH)
                && let Some(next) = cur.peek_next()
                && next.is_ascii_punctuation()
            {
                let start = cur.pos();
                cur.bump_n(2);
                out.push(Replacement::node(
                    Span::new(start, cur.pos()),
                    InlineNode::Text(char::from(next).to_string()),
                ));
                continue;
            }
            cur.bump();
        }

        out
    }
}
