use crate::parsing::span::Span;

use super::types::InlineNode;

/// Which container a rule opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Strong,
    Emphasis,
}

impl ContainerKind {
    pub fn wrap(self, children: Vec<InlineNode>) -> InlineNode {
        match self {
            ContainerKind::Strong => InlineNode::Strong(children),
            ContainerKind::Emphasis => InlineNode::Emphasis(children),
        }
    }
}

/// What a rule puts in place of the text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Produced {
    /// A finished node; its text is hidden from every later rule.
    Node(InlineNode),
    /// A container whose `inner` span (inside the scanned text) is still raw
    /// and keeps flowing through the remaining rules.
    Container { kind: ContainerKind, inner: Span },
}

/// One match of an [`InlineRule`] inside the text it scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Span,
    pub produced: Produced,
}

impl Replacement {
    pub fn node(span: Span, node: InlineNode) -> Self {
        Self {
            span,
            produced: Produced::Node(node),
        }
    }

    pub fn container(span: Span, kind: ContainerKind, inner: Span) -> Self {
        Self {
            span,
            produced: Produced::Container { kind, inner },
        }
    }
}

/// A named inline transform.
///
/// Rules run in registry order over a text run in which everything earlier
/// rules claimed has been replaced by opaque placeholders. A rule never sees
/// the inside of a finished node.
pub trait InlineRule: Send + Sync {
    /// Unique name, used as an anchor for [`Location`](super::Location).
    fn name(&self) -> &'static str;

    /// Finds this rule's matches in `text`.
    ///
    /// Replacements must be non-empty, disjoint, on UTF-8 boundaries and
    /// ordered by start; the processor skips any that are not.
    fn scan(&self, text: &str) -> Vec<Replacement>;
}
