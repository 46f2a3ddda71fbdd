//! Numeric property validators
//!
//! Non-numbers are rejected. Parity and divisibility only apply to integral
//! numbers (`4.0` counts, `4.5` does not).

use serde_json::Value;

use crate::foundation::{ConfigError, value};
use crate::params;

fn sign(input: &Value) -> Option<f64> {
    input.as_f64().filter(|n| !n.is_nan())
}

crate::rule! {
    /// Validates that a number is greater than zero.
    pub Positive = "positive";
    check(input) { sign(input).is_some_and(|n| n > 0.0) }
    fn positive();
}

crate::rule! {
    /// Validates that a number is less than zero.
    pub Negative = "negative";
    check(input) { sign(input).is_some_and(|n| n < 0.0) }
    fn negative();
}

crate::rule! {
    /// Validates that an integer is even.
    pub Even = "even";
    check(input) { value::as_integer(input).is_some_and(|n| n % 2 == 0) }
    fn even();
}

crate::rule! {
    /// Validates that an integer is odd.
    pub Odd = "odd";
    check(input) { value::as_integer(input).is_some_and(|n| n % 2 != 0) }
    fn odd();
}

crate::rule! {
    /// Validates that an integer is a multiple of a given number.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::prelude::*;
    ///
    /// let rule = multiple(3).unwrap();
    /// assert!(rule.check(&json!(9)));
    /// assert!(!rule.check(&json!(7)));
    /// assert!(multiple(0).is_err());
    /// ```
    pub Multiple { multiple_of: i64 } = "multiple";
    check(self, input) {
        value::as_integer(input)
            .and_then(|n| n.checked_rem(i128::from(self.multiple_of)))
            .is_some_and(|r| r == 0)
    }
    params(self) { params! { "multiple_of" => self.multiple_of } }
    new(multiple_of: i64) -> ConfigError {
        if multiple_of == 0 {
            Err(ConfigError::InvalidArgument {
                rule: "multiple",
                reason: "the divisor must not be zero".to_owned(),
            })
        } else {
            Ok(Self { multiple_of })
        }
    }
    fn multiple(multiple_of: i64) -> ConfigError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use serde_json::json;

    #[test]
    fn test_sign() {
        assert!(positive().check(&json!(0.1)));
        assert!(!positive().check(&json!(0)));
        assert!(negative().check(&json!(-1)));
        assert!(!negative().check(&json!("-1")));
    }

    #[test]
    fn test_parity() {
        assert!(even().check(&json!(-4)));
        assert!(even().check(&json!(4.0)));
        assert!(!even().check(&json!(4.5)));
        assert!(odd().check(&json!(-3)));
        assert!(!odd().check(&json!(0)));
        assert!(!odd().check(&json!(null)));
    }

    #[test]
    fn test_multiple() {
        let rule = multiple(-5).unwrap();
        assert!(rule.check(&json!(25)));
        assert!(rule.check(&json!(0)));

        let err = rule.assert(&json!(7)).unwrap_err();
        assert_eq!(err.message, "7 must be a multiple of -5");
    }

    #[test]
    fn test_multiple_of_zero_rejects_without_panicking() {
        let rule = Multiple { multiple_of: 0 };
        assert!(!rule.check(&json!(4)));
        assert!(!rule.check(&json!(0)));
        assert_eq!(rule.assert(&json!(4)).unwrap_err().id, "multiple");
    }
}
