//! Built-in rule predicates for the social domain.
//!
//! These are the business rules attached to profile and post DTOs:
//! an adult-age check over a date-of-birth field and a companion-field
//! requirement driven by a trigger value (parent post required for
//! replies and quotes).

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::Value;

use super::rules::Predicate;

/// Inclusive age window accepted at profile registration.
pub const MIN_ADULT_AGE: i32 = 15;
pub const MAX_ADULT_AGE: i32 = 100;

/// Age-range predicate over a date-of-birth field.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` strings. Null,
/// missing, non-string, and unparseable values fail the rule instead of
/// raising, as do birth dates in the future. Numeric epoch values are
/// rejected like any other non-string input.
pub fn adult_age(min_age: i32, max_age: i32) -> Predicate {
    Arc::new(move |value, _instance| {
        let Some(birth) = value.and_then(Value::as_str).and_then(parse_birth_date) else {
            return false;
        };
        match age_on(birth, Utc::now().date_naive()) {
            Some(age) => (min_age..=max_age).contains(&age),
            None => false,
        }
    })
}

/// Companion-field predicate: when `trigger_property` holds one of
/// `trigger_values`, the bound property must be present and non-null.
/// Any other trigger value, or an absent trigger, passes vacuously.
pub fn required_when(trigger_property: &str, trigger_values: &[&str]) -> Predicate {
    let trigger_property = trigger_property.to_string();
    let trigger_values: Vec<String> = trigger_values.iter().map(ToString::to_string).collect();

    Arc::new(move |value, instance| {
        let triggered = instance
            .get(&trigger_property)
            .and_then(Value::as_str)
            .is_some_and(|v| trigger_values.iter().any(|t| t == v));
        if !triggered {
            return true;
        }
        matches!(value, Some(v) if !v.is_null())
    })
}

fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Age in whole years at `today`: calendar-year difference, minus one if
/// `today` precedes this year's birthday. `None` for future birth dates.
fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<i32> {
    if birth > today {
        return None;
    }
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}
