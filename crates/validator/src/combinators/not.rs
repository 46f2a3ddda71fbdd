//! NOT combinator - logical negation of a rule
//!
//! This module provides the [`Not`] combinator which inverts the result of
//! a rule.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! // Anything but a string
//! let rule = not(string_type());
//! assert!(rule.check(&json!(1)));
//!
//! let error = rule.assert(&json!("x")).unwrap_err();
//! assert_eq!(error.param("rule"), Some("stringType"));
//! ```

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Inverts a rule.
///
/// - If the inner rule fails, `Not` passes.
/// - If the inner rule passes, `Not` fails with a `not` report naming the
///   inner rule in its `rule` param. The report has no children: the inner
///   rule succeeded, so there is nothing below it to show.
#[derive(Debug)]
pub struct Not {
    inner: BoxedRule,
}

impl Not {
    /// Creates a new `Not` combinator.
    pub fn new<R: Rule + 'static>(inner: R) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &dyn Rule {
        self.inner.as_ref()
    }
}

/// Builds the report for `rule` unexpectedly accepting `input`.
pub(crate) fn unexpected_pass(
    rule: &dyn Rule,
    input: &Value,
    ctx: &Context<'_>,
) -> ValidationError {
    ctx.reject("not", params! { "rule" => rule.id() }, input)
}

impl Rule for Not {
    fn id(&self) -> &str {
        "not"
    }

    fn check(&self, input: &Value) -> bool {
        !self.inner.check(input)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        if self.inner.check(input) {
            Err(unexpected_pass(self.inner.as_ref(), input, ctx))
        } else {
            Ok(())
        }
    }
}

/// Creates a `Not` combinator from a rule.
pub fn not<R: Rule + 'static>(rule: R) -> Not {
    Not::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::validators::{even, positive};
    use serde_json::json;

    #[test]
    fn test_not_inverts() {
        let rule = not(even());
        assert!(rule.check(&json!(3)));
        assert!(!rule.check(&json!(4)));
    }

    #[test]
    fn test_not_report_names_inner_rule() {
        let err = even().not().assert(&json!(4)).unwrap_err();
        assert_eq!(err.id, "not");
        assert_eq!(err.param("rule"), Some("even"));
        assert_eq!(err.message, "4 must not pass the \"even\" rule");
        assert!(err.children.is_empty());
    }

    #[test]
    fn test_double_negation() {
        let rule = not(not(positive()));
        for n in [-2, 0, 5] {
            assert_eq!(rule.check(&json!(n)), positive().check(&json!(n)));
        }
    }
}
