use std::fmt;

use super::rule::InlineRule;
use super::rules::{
    CodeSpanRule, DelimiterRule, EscapeRule, LineBreakRule, NotStrongRule, TextRule,
};

/// Where to insert a rule relative to the ones already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    Start,
    End,
    /// Immediately before the named rule.
    Before(&'a str),
    /// Immediately after the named rule.
    After(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("No inline rule named `{0}` is registered")]
    UnknownRule(String),
    #[error("An inline rule named `{0}` is already registered")]
    DuplicateRule(String),
}

/// Something that installs rules into a registry, such as the magic link
/// extension.
pub trait Extension {
    fn extend(&self, registry: &mut InlineRegistry) -> Result<(), RegistryError>;
}

/// The ordered inline rules of one processing session.
///
/// Each session owns its registry; nothing here is global. Order matters:
/// a rule only sees text that no earlier rule claimed.
pub struct InlineRegistry {
    rules: Vec<Box<dyn InlineRule>>,
}

impl InlineRegistry {
    /// An empty registry. Text passes through untouched except that any raw
    /// remainder becomes `Text` nodes.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The builtin rules, in order:
    /// `backtick`, `escape`, `not_strong`, `strong`, `strong2`, `emphasis`,
    /// `emphasis2`, `line_break`, `text`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.push(CodeSpanRule);
        registry.push(EscapeRule);
        registry.push(NotStrongRule::new());
        registry.push(DelimiterRule::strong());
        registry.push(DelimiterRule::strong_underscore());
        registry.push(DelimiterRule::emphasis());
        registry.push(DelimiterRule::emphasis_underscore());
        registry.push(LineBreakRule::new());
        registry.push(TextRule);
        registry
    }

    // Builtin names are distinct, so the duplicate check is not needed here.
    fn push(&mut self, rule: impl InlineRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Inserts `rule` at `at`.
    pub fn insert(
        &mut self,
        rule: impl InlineRule + 'static,
        at: Location<'_>,
    ) -> Result<(), RegistryError> {
        let name = rule.name();
        if self.position(name).is_some() {
            return Err(RegistryError::DuplicateRule(name.to_string()));
        }

        let index = match at {
            Location::Start => 0,
            Location::End => self.rules.len(),
            Location::Before(anchor) => self.anchor(anchor)?,
            Location::After(anchor) => self.anchor(anchor)? + 1,
        };

        log::debug!("registering inline rule `{name}` at {at:?} (index {index})");
        self.rules.insert(index, Box::new(rule));
        Ok(())
    }

    /// Lets `extension` install its rules.
    pub fn register(&mut self, extension: &dyn Extension) -> Result<(), RegistryError> {
        extension.extend(self)
    }

    /// Removes the named rule, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.rules.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Rule names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn InlineRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn anchor(&self, name: &str) -> Result<usize, RegistryError> {
        self.position(name)
            .ok_or_else(|| RegistryError::UnknownRule(name.to_string()))
    }
}

impl Default for InlineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for InlineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::rule::Replacement;

    struct Named(&'static str);

    impl InlineRule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn scan(&self, _text: &str) -> Vec<Replacement> {
            Vec::new()
        }
    }

    #[test]
    fn defaults_are_ordered() {
        let registry = InlineRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec![
                "backtick",
                "escape",
                "not_strong",
                "strong",
                "strong2",
                "emphasis",
                "emphasis2",
                "line_break",
                "text",
            ]
        );
    }

    #[test]
    fn insert_relative_to_anchor() {
        let mut registry = InlineRegistry::with_defaults();
        registry
            .insert(Named("first"), Location::Before("text"))
            .unwrap();
        registry
            .insert(Named("second"), Location::Before("text"))
            .unwrap();
        registry
            .insert(Named("after_escape"), Location::After("escape"))
            .unwrap();

        let names = registry.names();
        assert_eq!(names[2], "after_escape");
        assert_eq!(&names[names.len() - 3..], &["first", "second", "text"]);
    }

    #[test]
    fn insert_at_ends() {
        let mut registry = InlineRegistry::empty();
        registry.insert(Named("b"), Location::End).unwrap();
        registry.insert(Named("a"), Location::Start).unwrap();
        registry.insert(Named("c"), Location::End).unwrap();
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_anchor_is_an_error() {
        let mut registry = InlineRegistry::empty();
        let err = registry
            .insert(Named("x"), Location::Before("text"))
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownRule("text".into()));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_name_is_an_error() {
        let mut registry = InlineRegistry::with_defaults();
        let err = registry
            .insert(Named("emphasis"), Location::End)
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRule("emphasis".into()));
        assert_eq!(
            err.to_string(),
            "An inline rule named `emphasis` is already registered"
        );
    }

    #[test]
    fn remove_rule() {
        let mut registry = InlineRegistry::with_defaults();
        assert!(registry.remove("line_break"));
        assert!(!registry.remove("line_break"));
        assert!(!registry.contains("line_break"));
        assert_eq!(registry.len(), 8);
    }
}
