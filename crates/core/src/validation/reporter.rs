//! Violation aggregation into a caller-facing result.

use super::rules::{ValidationResult, Violation};

/// Wrap evaluator output into a [`ValidationResult`].
///
/// Pure aggregation: no filtering, no deduplication. `is_valid` is defined
/// as the violation list being empty, never tracked separately.
pub fn report(violations: Vec<Violation>) -> ValidationResult {
    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}
