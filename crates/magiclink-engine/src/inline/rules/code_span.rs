use crate::inline::{InlineNode, InlineRule, Replacement};
use crate::parsing::{cursor::Cursor, span::Span};

/// Backtick code spans.
///
/// A run of N backticks opens a span closed by the next run of exactly N.
/// An opener with no closer is literal text. A backtick escaped with `\`
/// never opens a span.
pub struct CodeSpanRule;

impl CodeSpanRule {
    pub const NAME: &'static str = "backtick";
    pub const TICK: u8 = b'`';
}

impl InlineRule for CodeSpanRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan(&self, text: &str) -> Vec<Replacement> {
        let mut cur = Cursor::new(text);
        let mut out = vec![];

        while !cur.eof() {
            match cur.peek() {
                Some(b'\\') => cur.bump_n(2),
                Some(Self::TICK) => {
                    if let Some(rep) = try_parse_code_span(&mut cur) {
                        out.push(rep);
                    }
                }
                _ => {
                    cur.bump();
                }
            }
        }

        out
    }
}

/// Parses a code span at the cursor. On success the cursor ends after the
/// closing run; on failure it ends after the opening run, which is literal.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Replacement> {
    let start = cur.pos();
    let ticks = cur.bump_while(CodeSpanRule::TICK);
    let inner_start = cur.pos();

    let mut probe = cur.clone();
    while !probe.eof() {
        if probe.peek() != Some(CodeSpanRule::TICK) {
            probe.bump();
            continue;
        }
        let inner_end = probe.pos();
        if probe.bump_while(CodeSpanRule::TICK) == ticks {
            *cur = probe;
            let code = cur.s[inner_start..inner_end].trim();
            return Some(Replacement::node(
                Span::new(start, cur.pos()),
                InlineNode::Code(code.to_string()),
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str) -> Vec<(Span, String)> {
        CodeSpanRule
            .scan(text)
            .into_iter()
            .map(|rep| match rep.produced {
                crate::inline::Produced::Node(InlineNode::Code(code)) => (rep.span, code),
                other => panic!("unexpected {other:?}"),
            })
            .collect()
    }

    #[test]
    fn single_tick_span() {
        assert_eq!(codes("a `code` b"), vec![(Span::new(2, 8), "code".into())]);
    }

    #[test]
    fn double_ticks_may_contain_single() {
        assert_eq!(
            codes("``a ` b``"),
            vec![(Span::new(0, 9), "a ` b".into())]
        );
    }

    #[test]
    fn unclosed_opener_is_literal() {
        assert!(codes("`unclosed code").is_empty());
        // The unmatched double run does not let its second tick pair later
        assert!(codes("``x`").is_empty());
    }

    #[test]
    fn escaped_tick_does_not_open() {
        assert_eq!(codes(r"\`a\` `b`"), vec![(Span::new(6, 9), "b".into())]);
    }

    #[test]
    fn content_is_trimmed_and_raw() {
        assert_eq!(
            codes("` http://example.com `"),
            vec![(Span::new(0, 22), "http://example.com".into())]
        );
    }
}
