//! Placeholder stash.
//!
//! When a rule claims a span, the span is cut out of the working text and
//! replaced by `STX <index> ETX`. Later rules scan the working text as one
//! string, so delimiters still pair up across earlier matches, but none of
//! their patterns admit the marker characters, so nothing can match into or
//! through a placeholder.

use std::borrow::Cow;

use crate::parsing::span::Span;

use super::rule::ContainerKind;
use super::types::InlineNode;

pub const STX: char = '\u{2}';
pub const ETX: char = '\u{3}';

#[derive(Debug)]
pub(crate) enum Stashed {
    Node(InlineNode),
    Container { kind: ContainerKind, text: String },
}

#[derive(Debug, Default)]
pub(crate) struct Stash {
    entries: Vec<Option<Stashed>>,
}

impl Stash {
    /// Stores `entry` and returns the placeholder that stands in for it.
    pub fn push(&mut self, entry: Stashed) -> String {
        let index = self.entries.len();
        self.entries.push(Some(entry));
        format!("{STX}{index}{ETX}")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Takes the raw text out of the container at `index`, if it is one.
    pub fn take_container_text(&mut self, index: usize) -> Option<String> {
        match self.entries.get_mut(index)? {
            Some(Stashed::Container { text, .. }) => Some(std::mem::take(text)),
            _ => None,
        }
    }

    pub fn set_container_text(&mut self, index: usize, new_text: String) {
        if let Some(Some(Stashed::Container { text, .. })) = self.entries.get_mut(index) {
            *text = new_text;
        }
    }

    /// Turns working text back into nodes, expanding placeholders
    /// recursively. Raw leftovers become `Text`; adjacent text merges.
    pub fn resolve(&mut self, text: &str) -> Vec<InlineNode> {
        let mut out = Vec::new();
        for piece in pieces(text) {
            match piece {
                Piece::Raw(raw) => push_node(&mut out, InlineNode::Text(raw.to_string())),
                Piece::Placeholder(index) => {
                    match self.entries.get_mut(index).and_then(Option::take) {
                        Some(Stashed::Node(node)) => push_node(&mut out, node),
                        Some(Stashed::Container { kind, text }) => {
                            let children = self.resolve(&text);
                            push_node(&mut out, kind.wrap(children));
                        }
                        None => log::warn!("placeholder {index} resolved twice or never stashed"),
                    }
                }
            }
        }
        out
    }
}

fn push_node(out: &mut Vec<InlineNode>, node: InlineNode) {
    match node {
        InlineNode::Text(text) => {
            if text.is_empty() {
                return;
            }
            if let Some(InlineNode::Text(existing)) = out.last_mut() {
                existing.push_str(&text);
            } else {
                out.push(InlineNode::Text(text));
            }
        }
        other => out.push(other),
    }
}

/// Replaces stray marker characters in source text so they can never be
/// mistaken for placeholders.
pub(crate) fn strip_markers(text: &str) -> Cow<'_, str> {
    if text.contains([STX, ETX]) {
        Cow::Owned(text.replace([STX, ETX], "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Raw(&'a str),
    Placeholder(usize),
}

/// Splits working text into raw runs and placeholders.
pub(crate) fn pieces(text: &str) -> Vec<Piece<'_>> {
    let mut out = Vec::new();
    let mut raw_start = 0;
    for (start, end, index) in placeholders(text) {
        if start > raw_start {
            out.push(Piece::Raw(&text[raw_start..start]));
        }
        out.push(Piece::Placeholder(index));
        raw_start = end;
    }
    if raw_start < text.len() {
        out.push(Piece::Raw(&text[raw_start..]));
    }
    out
}

/// Spans of the raw (non-placeholder) runs in working text.
pub(crate) fn raw_runs(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut raw_start = 0;
    for (start, end, _) in placeholders(text) {
        if start > raw_start {
            out.push(Span::new(raw_start, start));
        }
        raw_start = end;
    }
    if raw_start < text.len() {
        out.push(Span::new(raw_start, text.len()));
    }
    out
}

/// `(start, end, index)` of every well-formed placeholder.
fn placeholders(text: &str) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    text.match_indices(STX).filter_map(move |(start, _)| {
        let body_start = start + STX.len_utf8();
        let len = text[body_start..].find(ETX)?;
        let index = text[body_start..body_start + len].parse().ok()?;
        Some((start, body_start + len + ETX.len_utf8(), index))
    })
}
