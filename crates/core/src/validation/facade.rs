//! Validation entry point tying registry, evaluator, and reporter together.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

use super::registry::RuleRegistry;
use super::rules::ValidationResult;
use super::{evaluator, reporter};

/// Types that can be validated against the rule registry.
///
/// `TARGET` is the stable identifier rules are registered under — the
/// explicit replacement for resolving a class from runtime metadata.
pub trait Validatable {
    const TARGET: &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorConfig {
    /// When set, validating a type with no registered rules is a usage
    /// error instead of an automatic pass.
    pub strict: bool,
}

/// Stateless validation facade over an immutable [`RuleRegistry`].
///
/// Each `validate` call is independent; concurrent calls share the
/// registry without locking because nothing mutates after construction.
#[derive(Debug)]
pub struct Validator {
    registry: RuleRegistry,
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(registry: RuleRegistry) -> Self {
        Self::with_config(registry, ValidatorConfig::default())
    }

    pub fn with_config(registry: RuleRegistry, config: ValidatorConfig) -> Self {
        Self { registry, config }
    }

    /// Run every rule registered for `T` against `instance`.
    ///
    /// Rule failures come back as data inside the [`ValidationResult`];
    /// the `Err` branch is reserved for usage faults (strict-mode
    /// unregistered type, instance not serializable as a JSON object).
    pub fn validate<T>(&self, instance: &T) -> Result<ValidationResult, CoreError>
    where
        T: Validatable + Serialize,
    {
        let bindings = self.registry.lookup(T::TARGET);
        if bindings.is_empty() {
            if self.config.strict {
                return Err(CoreError::UnregisteredType(T::TARGET));
            }
            return Ok(reporter::report(Vec::new()));
        }

        let value = serde_json::to_value(instance)
            .map_err(|err| CoreError::Serialization(err.to_string()))?;
        let Value::Object(map) = value else {
            return Err(CoreError::Serialization(format!(
                "{} does not serialize to a JSON object",
                T::TARGET
            )));
        };

        Ok(reporter::report(evaluator::evaluate(&map, bindings)))
    }
}
