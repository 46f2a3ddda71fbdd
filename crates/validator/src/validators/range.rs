//! Comparison validators
//!
//! Bounds are values of the model. Numbers compare numerically and strings
//! lexicographically; an input that cannot be compared with the bound
//! (a string against a numeric bound, say) is rejected.

use std::cmp::Ordering;

use serde_json::Value;

use crate::foundation::{ConfigError, value};
use crate::params;

fn ordering(input: &Value, bound: &Value) -> Option<Ordering> {
    value::compare(input, bound)
}

crate::rule! {
    /// Validates that a value is at least a minimum.
    pub Min { compare_to: Value } = "min";
    check(self, input) { ordering(input, &self.compare_to).is_some_and(Ordering::is_ge) }
    params(self) { params! { "compare_to" => self.compare_to } }
    new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
    fn min(compare_to: impl Into<Value>);
}

crate::rule! {
    /// Validates that a value does not exceed a maximum.
    pub Max { compare_to: Value } = "max";
    check(self, input) { ordering(input, &self.compare_to).is_some_and(Ordering::is_le) }
    params(self) { params! { "compare_to" => self.compare_to } }
    new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
    fn max(compare_to: impl Into<Value>);
}

crate::rule! {
    /// Validates that a value is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::prelude::*;
    ///
    /// let rule = greater_than(5);
    /// assert!(rule.check(&json!(6)));
    /// assert!(!rule.check(&json!(5))); // Not strictly greater
    /// ```
    pub GreaterThan { compare_to: Value } = "greaterThan";
    check(self, input) { ordering(input, &self.compare_to).is_some_and(Ordering::is_gt) }
    params(self) { params! { "compare_to" => self.compare_to } }
    new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
    fn greater_than(compare_to: impl Into<Value>);
}

crate::rule! {
    /// Validates that a value is strictly less than a threshold.
    pub LessThan { compare_to: Value } = "lessThan";
    check(self, input) { ordering(input, &self.compare_to).is_some_and(Ordering::is_lt) }
    params(self) { params! { "compare_to" => self.compare_to } }
    new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
    fn less_than(compare_to: impl Into<Value>);
}

crate::rule! {
    /// Validates that a value is within an inclusive range.
    pub Between { min: Value, max: Value } = "between";
    check(self, input) {
        ordering(input, &self.min).is_some_and(Ordering::is_ge)
            && ordering(input, &self.max).is_some_and(Ordering::is_le)
    }
    params(self) { params! { "min" => self.min, "max" => self.max } }
    new(min: impl Into<Value>, max: impl Into<Value>) -> ConfigError {
        let (min, max) = (min.into(), max.into());
        match value::compare(&min, &max) {
            Some(Ordering::Greater) => Err(ConfigError::InvalidBounds {
                rule: "between",
                min: min.to_string(),
                max: max.to_string(),
            }),
            Some(_) => Ok(Self { min, max }),
            None => Err(ConfigError::InvalidArgument {
                rule: "between",
                reason: format!("bounds {min} and {max} cannot be compared"),
            }),
        }
    }
    fn between(min: impl Into<Value>, max: impl Into<Value>) -> ConfigError;
}
