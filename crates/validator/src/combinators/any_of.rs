//! ANY-OF combinator - logical disjunction of rules
//!
//! This module provides the [`AnyOf`] combinator: at least one child rule
//! must pass for the combined rule to pass.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let rule = any_of![string_type(), int_type()];
//! assert!(rule.check(&json!("x")));
//! assert!(rule.check(&json!(1)));
//! assert!(!rule.check(&json!(1.5)));
//! ```

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Combines rules with logical OR.
///
/// Evaluation stops at the first passing child. If every child fails, the
/// report contains all of their reports, in declaration order, to explain
/// why none matched.
///
/// With no children, `AnyOf` fails: nothing can match.
#[derive(Debug, Default)]
pub struct AnyOf {
    rules: Vec<BoxedRule>,
}

impl AnyOf {
    /// Creates a new `AnyOf` combinator.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Appends another alternative.
    pub fn or<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the alternatives.
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }
}

impl Rule for AnyOf {
    fn id(&self) -> &str {
        "anyOf"
    }

    fn check(&self, input: &Value) -> bool {
        self.rules.iter().any(|rule| rule.check(input))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let mut failures = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            match rule.evaluate(input, ctx) {
                Ok(()) => return Ok(()),
                Err(e) => failures.push(e),
            }
        }

        let params = params! { "total" => self.rules.len() };
        Err(ctx.reject_with_children(self.id(), params, input, failures))
    }
}

/// Creates an `AnyOf` combinator from a list of rules.
///
/// See also the [`any_of!`](crate::any_of!) macro, which boxes its arguments.
pub fn any_of(rules: Vec<BoxedRule>) -> AnyOf {
    AnyOf::new(rules)
}
