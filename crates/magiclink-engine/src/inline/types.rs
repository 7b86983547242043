use crate::magiclink::LinkNode;

/// A finished inline node.
///
/// Every variant except the two containers is atomic: once produced, no
/// later rule sees its text again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text, already unescaped.
    Text(String),
    /// Content of a backtick code span, raw.
    Code(String),
    /// `**strong**` / `__strong__`.
    Strong(Vec<InlineNode>),
    /// `*emphasis*` / `_emphasis_`.
    Emphasis(Vec<InlineNode>),
    /// A detected URL or email address.
    Link(LinkNode),
    /// Two or more spaces before a newline.
    LineBreak,
}

impl InlineNode {
    /// Returns the text of a `Text` node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the link of a `Link` node.
    pub fn as_link(&self) -> Option<&LinkNode> {
        match self {
            InlineNode::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Returns nested inline content for container nodes (strong/emphasis).
    pub fn children(&self) -> Option<&[InlineNode]> {
        match self {
            InlineNode::Strong(children) | InlineNode::Emphasis(children) => Some(children),
            _ => None,
        }
    }
}

/// Collects every link in `nodes`, depth first, in document order.
pub fn links_in(nodes: &[InlineNode]) -> Vec<&LinkNode> {
    let mut out = Vec::new();
    collect_links(nodes, &mut out);
    out
}

fn collect_links<'a>(nodes: &'a [InlineNode], out: &mut Vec<&'a LinkNode>) {
    for node in nodes {
        if let Some(link) = node.as_link() {
            out.push(link);
        } else if let Some(children) = node.children() {
            collect_links(children, out);
        }
    }
}
