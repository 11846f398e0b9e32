//! Rule registry — target type id to ordered rule bindings.

use std::collections::HashMap;

use crate::error::CoreError;

use super::rules::{Rule, RuleBinding};

/// Holds every registered rule, keyed by target type id.
///
/// Built once during startup and treated as read-only afterwards. Share a
/// populated registry behind `Arc` (or a `OnceLock` for process-wide use)
/// so concurrent lookups never observe a partially populated rule set.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    bindings: HashMap<&'static str, Vec<RuleBinding>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `rule` to `target`.
    ///
    /// Fails with [`CoreError::DuplicateRule`] when a rule with the same
    /// name is already bound to the same target + property pair. The same
    /// rule name on a different property is allowed.
    pub fn register(&mut self, target: &'static str, rule: Rule) -> Result<(), CoreError> {
        let entries = self.bindings.entry(target).or_default();
        if entries
            .iter()
            .any(|b| b.rule.name == rule.name && b.rule.property == rule.property)
        {
            return Err(CoreError::DuplicateRule {
                rule: rule.name,
                target,
                property: rule.property,
            });
        }
        entries.push(RuleBinding { target, rule });
        Ok(())
    }

    /// All bindings for `target`, in registration order.
    ///
    /// Unknown targets yield an empty slice, not an error.
    pub fn lookup(&self, target: &str) -> &[RuleBinding] {
        self.bindings.get(target).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;

    fn rule(name: &str, property: &str) -> Rule {
        Rule::new(name, property, Arc::new(|_, _| true), "failed")
    }

    #[test]
    fn lookup_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register("Post", rule("first", "body")).unwrap();
        registry.register("Post", rule("second", "title")).unwrap();
        registry.register("Post", rule("third", "body")).unwrap();

        let names: Vec<_> = registry
            .lookup("Post")
            .iter()
            .map(|b| b.rule.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn lookup_unknown_target_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.lookup("Nobody").is_empty());
    }

    #[test]
    fn duplicate_name_same_property_rejected() {
        let mut registry = RuleRegistry::new();
        registry.register("Post", rule("required", "body")).unwrap();

        let err = registry
            .register("Post", rule("required", "body"))
            .unwrap_err();
        assert_matches!(
            err,
            CoreError::DuplicateRule { target: "Post", .. }
        );
    }

    #[test]
    fn same_name_different_property_allowed() {
        let mut registry = RuleRegistry::new();
        registry.register("Post", rule("required", "body")).unwrap();
        registry
            .register("Post", rule("required", "title"))
            .unwrap();
        assert_eq!(registry.lookup("Post").len(), 2);
    }

    #[test]
    fn same_name_different_target_allowed() {
        let mut registry = RuleRegistry::new();
        registry.register("Post", rule("required", "body")).unwrap();
        registry.register("User", rule("required", "body")).unwrap();
        assert_eq!(registry.lookup("Post").len(), 1);
        assert_eq!(registry.lookup("User").len(), 1);
    }
}
