use super::registry::InlineRegistry;
use super::rule::{InlineRule, Produced};
use super::stash::{Stash, Stashed, strip_markers};
use super::types::InlineNode;

/// Runs every rule of `registry`, in order, over one text run.
///
/// Each rule is applied to the working text and to the raw inner text of
/// every container produced so far (including containers it produces
/// itself, so nested pairs of the same delimiter resolve).
pub fn process(registry: &InlineRegistry, text: &str) -> Vec<InlineNode> {
    let mut root = strip_markers(text).into_owned();
    let mut stash = Stash::default();

    for rule in registry.rules() {
        if let Some(updated) = apply(rule, &root, &mut stash) {
            root = updated;
        }

        let mut index = 0;
        while index < stash.len() {
            if let Some(inner) = stash.take_container_text(index) {
                let updated = apply(rule, &inner, &mut stash).unwrap_or(inner);
                stash.set_container_text(index, updated);
            }
            index += 1;
        }
    }

    stash.resolve(&root)
}

/// Applies one rule to `text`, returning the rewritten text or `None` when
/// the rule matched nothing.
fn apply(rule: &dyn InlineRule, text: &str, stash: &mut Stash) -> Option<String> {
    let replacements = rule.scan(text);
    if replacements.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for rep in replacements {
        let span = rep.span;
        let valid = !span.is_empty()
            && span.start >= last
            && span.slice(text).is_some();
        if !valid {
            log::warn!(
                "inline rule `{}` returned an unusable span {span:?}; skipping it",
                rule.name()
            );
            continue;
        }

        let entry = match rep.produced {
            Produced::Node(node) => Stashed::Node(node),
            Produced::Container { kind, inner } => match inner.slice(text) {
                Some(inner_text) if inner.start >= span.start && inner.end <= span.end => {
                    Stashed::Container {
                        kind,
                        text: inner_text.to_string(),
                    }
                }
                _ => {
                    log::warn!(
                        "inline rule `{}` returned a container with inner span {inner:?} outside {span:?}",
                        rule.name()
                    );
                    continue;
                }
            },
        };

        out.push_str(&text[last..span.start]);
        out.push_str(&stash.push(entry));
        last = span.end;
    }
    out.push_str(&text[last..]);
    Some(out)
}
