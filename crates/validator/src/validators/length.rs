//! Length validators
//!
//! Length is the number of characters of a string, or the number of
//! members of an array or object. Other inputs have no length.

use crate::foundation::{ConfigError, value};
use crate::params;

/// Rendered in place of a missing upper bound.
const UNBOUNDED: &str = "unlimited";

crate::rule! {
    /// Validates that a value is not empty.
    ///
    /// `null`, `""`, `[]` and `{}` are empty; `0` and `false` are not.
    pub NotEmpty = "notEmpty";
    check(input) { !value::is_empty(input) }
    fn not_empty();
}

crate::rule! {
    /// Validates that a string or collection has a length within bounds.
    ///
    /// Either bound may be left open.
    pub Length { min: Option<usize>, max: Option<usize> } = "length";
    check(self, input) {
        value::length(input).is_some_and(|len| {
            self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
        })
    }
    params(self) {
        params! {
            "min" => self.min.unwrap_or(0),
            "max" => self.max.map_or_else(|| UNBOUNDED.to_owned(), |max| max.to_string()),
        }
    }
    new(min: Option<usize>, max: Option<usize>) -> ConfigError {
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => Err(ConfigError::InvalidBounds {
                rule: "length",
                min: lo.to_string(),
                max: hi.to_string(),
            }),
            _ => Ok(Self { min, max }),
        }
    }
    fn length(min: Option<usize>, max: Option<usize>) -> ConfigError;
}
