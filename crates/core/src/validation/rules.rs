//! Validation rule and result types.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

/// Pure predicate over a field value and the whole serialized instance.
///
/// The second argument carries the full object so cross-field rules can
/// read sibling properties; single-field rules simply ignore it. Predicates
/// must be deterministic and side-effect free, and must return `false` for
/// bad input rather than panic.
pub type Predicate = Arc<dyn Fn(Option<&Value>, &Map<String, Value>) -> bool + Send + Sync>;

/// A named validation rule attached to one property.
///
/// Immutable after registration. The optional message override takes
/// precedence over the default message when a violation is reported.
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub property: String,
    pub predicate: Predicate,
    pub default_message: String,
    pub message_override: Option<String>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        property: impl Into<String>,
        predicate: Predicate,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            property: property.into(),
            predicate,
            default_message: default_message.into(),
            message_override: None,
        }
    }

    /// Replace the default message with a caller-supplied one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message_override = Some(message.into());
        self
    }

    /// The message a violation of this rule carries.
    pub fn message(&self) -> &str {
        self.message_override
            .as_deref()
            .unwrap_or(&self.default_message)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("property", &self.property)
            .field("default_message", &self.default_message)
            .field("message_override", &self.message_override)
            .finish_non_exhaustive()
    }
}

/// One [`Rule`] bound to one target-type + property pair.
///
/// Many bindings may target the same property; all of them must pass.
#[derive(Debug, Clone)]
pub struct RuleBinding {
    pub target: &'static str,
    pub rule: Rule,
}

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub property: String,
    pub rule: String,
    pub message: String,
}

/// Aggregated outcome of validating one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}
