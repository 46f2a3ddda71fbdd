//! NULLABLE combinator - skips validation for `null`

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};

/// Accepts `null` without evaluating the inner rule.
///
/// Unlike [`Optional`](crate::combinators::Optional), empty strings and
/// collections are still delegated.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = nullable(not_empty());
/// assert!(rule.check(&json!(null)));
/// assert!(!rule.check(&json!("")));
/// ```
#[derive(Debug)]
pub struct Nullable {
    inner: BoxedRule,
}

impl Nullable {
    /// Creates a new `Nullable` combinator.
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

impl Rule for Nullable {
    fn id(&self) -> &str {
        "nullable"
    }

    fn check(&self, input: &Value) -> bool {
        input.is_null() || self.inner.check(input)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        if input.is_null() {
            Ok(())
        } else {
            self.inner.evaluate(input, ctx)
        }
    }
}

/// Creates a `Nullable` combinator.
pub fn nullable<R: Rule + 'static>(rule: R) -> Nullable {
    Nullable::new(rule)
}
