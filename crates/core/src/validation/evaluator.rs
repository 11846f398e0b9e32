//! Rule evaluator — pure logic, no registry or framework access.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::{Map, Value};

use super::rules::{RuleBinding, Violation};

/// Message attached to a violation when a predicate itself fails.
pub const EVALUATION_FAILED_MESSAGE: &str = "rule evaluation failed";

/// Evaluate all bindings against a single serialized instance.
///
/// Bindings run in registration order and every failure is recorded — a
/// property appears once per failing rule, with no deduplication. A
/// predicate that panics is converted into a violation carrying
/// [`EVALUATION_FAILED_MESSAGE`] so one broken rule cannot abort
/// validation of sibling fields.
pub fn evaluate(instance: &Map<String, Value>, bindings: &[RuleBinding]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for binding in bindings {
        let rule = &binding.rule;
        let value = instance.get(&rule.property);

        match catch_unwind(AssertUnwindSafe(|| (rule.predicate)(value, instance))) {
            Ok(true) => {}
            Ok(false) => violations.push(Violation {
                property: rule.property.clone(),
                rule: rule.name.clone(),
                message: rule.message().to_string(),
            }),
            Err(_) => violations.push(Violation {
                property: rule.property.clone(),
                rule: rule.name.clone(),
                message: EVALUATION_FAILED_MESSAGE.to_string(),
            }),
        }
    }

    violations
}
