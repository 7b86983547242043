//! HTML serialization of blocks and inline nodes.
//!
//! Text goes through `html_escape::encode_text`, attribute values through
//! `encode_double_quoted_attribute`. Output is compact: one block per line,
//! no wrapper element.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::inline::InlineNode;
use crate::magiclink::LinkNode;

/// Appends the HTML for `nodes` to `out`.
pub fn push_inline(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => {
                encode_text_to_string(text, out);
            }
            InlineNode::Code(code) => {
                out.push_str("<code>");
                encode_text_to_string(code, out);
                out.push_str("</code>");
            }
            InlineNode::Strong(children) => push_element(out, "strong", children),
            InlineNode::Emphasis(children) => push_element(out, "em", children),
            InlineNode::Link(link) => push_link(out, link),
            InlineNode::LineBreak => out.push_str("<br />\n"),
        }
    }
}

/// HTML for `nodes` as a new string.
pub fn inline_html(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    push_inline(&mut out, nodes);
    out
}

/// Appends `<p>...</p>` around already-processed inline content.
pub fn push_paragraph(out: &mut String, nodes: &[InlineNode]) {
    out.push_str("<p>");
    push_inline(out, nodes);
    out.push_str("</p>\n");
}

/// Appends a fenced code block. The first word of `info` becomes a
/// `language-*` class.
pub fn push_code_block(out: &mut String, info: &str, code: &str) {
    match info.split_whitespace().next() {
        Some(lang) => {
            out.push_str("<pre><code class=\"language-");
            encode_double_quoted_attribute_to_string(lang, out);
            out.push_str("\">");
        }
        None => out.push_str("<pre><code>"),
    }
    encode_text_to_string(code, out);
    out.push_str("</code></pre>\n");
}

fn push_element(out: &mut String, tag: &str, children: &[InlineNode]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_inline(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_link(out: &mut String, link: &LinkNode) {
    out.push_str("<a href=\"");
    encode_double_quoted_attribute_to_string(link.href(), out);
    out.push_str("\">");
    encode_text_to_string(link.display_text(), out);
    out.push_str("</a>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(href: &str, display: &str) -> InlineNode {
        InlineNode::Link(LinkNode::new(href.into(), display.into()).unwrap())
    }

    #[test]
    fn text_is_escaped() {
        let html = inline_html(&[InlineNode::Text("a < b & \"c\"".into())]);
        assert_eq!(html, "a &lt; b &amp; \"c\"");
    }

    #[test]
    fn nested_containers() {
        let nodes = vec![InlineNode::Strong(vec![
            InlineNode::Text("x ".into()),
            InlineNode::Emphasis(vec![InlineNode::Code("<y>".into())]),
        ])];
        assert_eq!(
            inline_html(&nodes),
            "<strong>x <em><code>&lt;y&gt;</code></em></strong>"
        );
    }

    #[test]
    fn link_attribute_is_escaped() {
        let nodes = vec![link("http://a.com/?a=1&b=2", "http://a.com/?a=1&b=2")];
        assert_eq!(
            inline_html(&nodes),
            "<a href=\"http://a.com/?a=1&amp;b=2\">http://a.com/?a=1&amp;b=2</a>"
        );
    }

    #[test]
    fn line_break() {
        let nodes = vec![
            InlineNode::Text("a".into()),
            InlineNode::LineBreak,
            InlineNode::Text("b".into()),
        ];
        assert_eq!(inline_html(&nodes), "a<br />\nb");
    }

    #[test]
    fn code_blocks() {
        let mut out = String::new();
        push_code_block(&mut out, "rust extra", "let a = 1 < 2;\n");
        push_code_block(&mut out, "", "plain\n");
        assert_eq!(
            out,
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n</code></pre>\n\
             <pre><code>plain\n</code></pre>\n"
        );
    }
}
