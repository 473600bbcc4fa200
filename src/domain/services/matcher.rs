//! Selector matcher
//!
//! Decides whether a selector applies to a combination. Every constrained
//! axis must match; unconstrained axes are wildcards. Specificity is
//! reported for diagnostics only and never picks a winner among matches.

use crate::domain::entities::{Combination, Selector, ValuePattern};
use crate::domain::value_objects::AxisValue;

/// True iff every (axis, pattern) pair of `selector` matches `combination`.
///
/// A constrained axis missing from the combination does not match.
pub fn matches(selector: &Selector, combination: &Combination) -> bool {
    selector
        .constraints()
        .all(|(axis, pattern)| match combination.get(axis) {
            Some(value) => value_matches(pattern, value),
            None => false,
        })
}

/// Number of axes the selector constrains.
pub fn specificity(selector: &Selector) -> usize {
    selector.len()
}

pub fn value_matches(pattern: &ValuePattern, value: &AxisValue) -> bool {
    match (pattern, value) {
        (ValuePattern::Exact(expected), actual) => expected == actual,
        (ValuePattern::Glob(glob), AxisValue::Value(text)) => glob.is_match(text),
        (ValuePattern::Glob(_), AxisValue::Absent) => false,
    }
}

/// Whether `pattern` can match at least one of `declared`.
pub fn is_reachable(pattern: &ValuePattern, declared: &[AxisValue]) -> bool {
    declared.iter().any(|value| value_matches(pattern, value))
}
