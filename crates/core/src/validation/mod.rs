//! Rule-based object validation engine.
//!
//! Rules are registered once at startup against a target type id and a
//! property name, then evaluated against serialized instances — all pure
//! logic with no database or framework dependencies. Validation failures
//! are ordinary data ([`Violation`] entries), never errors: only
//! registration mistakes and strict-mode misuse surface as [`CoreError`].
//!
//! [`CoreError`]: crate::error::CoreError

pub mod builtin;
pub mod evaluator;
pub mod facade;
pub mod registry;
pub mod reporter;
pub mod rules;

pub use facade::{Validatable, Validator, ValidatorConfig};
pub use registry::RuleRegistry;
pub use rules::{Predicate, Rule, RuleBinding, ValidationResult, Violation};
