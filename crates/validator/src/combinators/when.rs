//! WHEN combinator - conditional validation
//!
//! This module provides the [`When`] combinator which picks the rule to apply
//! based on whether a condition rule passes.
//!
//! # Use Cases
//!
//! - Apply different rules depending on the shape of the input
//! - Validate only inputs that meet a precondition
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! // Integers must be positive; strings must not be empty
//! let rule = when(int_type(), positive(), Some(not_empty().boxed()));
//! assert!(rule.check(&json!(5)));
//! assert!(!rule.check(&json!(-5)));
//! assert!(!rule.check(&json!("")));
//! ```

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};

/// Conditionally applies a rule.
///
/// If `condition` passes, the result is entirely that of `then`. Otherwise it
/// is that of `otherwise` when present, and a pass when absent: a condition
/// that is not met is not a failure by itself.
///
/// The condition's own report is never shown; `When` adds no report level of
/// its own.
#[derive(Debug)]
pub struct When {
    condition: BoxedRule,
    then: BoxedRule,
    otherwise: Option<BoxedRule>,
}

impl When {
    /// Creates a new `When` combinator.
    pub fn new<C, T>(condition: C, then: T, otherwise: Option<BoxedRule>) -> Self
    where
        C: Rule + 'static,
        T: Rule + 'static,
    {
        Self {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise,
        }
    }

    /// Sets the rule applied when the condition fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise<E: Rule + 'static>(mut self, rule: E) -> Self {
        self.otherwise = Some(Box::new(rule));
        self
    }

    fn branch(&self, input: &Value) -> Option<&dyn Rule> {
        if self.condition.check(input) {
            Some(self.then.as_ref())
        } else {
            self.otherwise.as_deref()
        }
    }
}

impl Rule for When {
    fn id(&self) -> &str {
        "when"
    }

    fn check(&self, input: &Value) -> bool {
        self.branch(input).is_none_or(|rule| rule.check(input))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        match self.branch(input) {
            Some(rule) => rule.evaluate(input, ctx),
            None => Ok(()),
        }
    }
}

/// Creates a `When` combinator.
pub fn when<C, T>(condition: C, then: T, otherwise: Option<BoxedRule>) -> When
where
    C: Rule + 'static,
    T: Rule + 'static,
{
    When::new(condition, then, otherwise)
}
