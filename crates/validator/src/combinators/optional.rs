//! OPTIONAL combinator - skips validation for empty inputs

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError, value};

/// Makes a rule optional.
///
/// Inputs that are empty per [`value::is_empty`] (`null`, `""`, `[]`, `{}`)
/// pass without evaluating the inner rule; everything else is delegated to it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = optional(length(Some(3), None).unwrap());
/// assert!(rule.check(&json!("")));
/// assert!(rule.check(&json!("abc")));
/// assert!(!rule.check(&json!("ab")));
/// ```
#[derive(Debug)]
pub struct Optional {
    inner: BoxedRule,
}

impl Optional {
    /// Creates a new `Optional` combinator.
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

impl Rule for Optional {
    fn id(&self) -> &str {
        "optional"
    }

    fn check(&self, input: &Value) -> bool {
        value::is_empty(input) || self.inner.check(input)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        if value::is_empty(input) {
            Ok(())
        } else {
            self.inner.evaluate(input, ctx)
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<R: Rule + 'static>(rule: R) -> Optional {
    Optional::new(rule)
}
