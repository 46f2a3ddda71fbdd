//! NONE-OF combinator - no child rule may pass

use serde_json::Value;

use crate::combinators::not::unexpected_pass;
use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Passes when no child rule passes.
///
/// The boolean outcome is that of `not(any_of(..))`, but the report lists
/// every child that unexpectedly passed, each as a `not` report, in
/// declaration order.
///
/// With no children, `NoneOf` passes.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = none_of![negative(), even()];
/// assert!(rule.check(&json!(3)));
///
/// let error = rule.assert(&json!(-4)).unwrap_err();
/// assert_eq!(error.children.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NoneOf {
    rules: Vec<BoxedRule>,
}

impl NoneOf {
    /// Creates a new `NoneOf` combinator.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Returns the child rules.
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }
}

impl Rule for NoneOf {
    fn id(&self) -> &str {
        "noneOf"
    }

    fn check(&self, input: &Value) -> bool {
        !self.rules.iter().any(|rule| rule.check(input))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let passed: Vec<ValidationError> = self
            .rules
            .iter()
            .filter(|rule| rule.check(input))
            .map(|rule| unexpected_pass(rule.as_ref(), input, ctx))
            .collect();

        if passed.is_empty() {
            return Ok(());
        }

        let params = params! {
            "passed" => passed.len(),
            "total" => self.rules.len(),
        };
        Err(ctx.reject_with_children(self.id(), params, input, passed))
    }
}

/// Creates a `NoneOf` combinator from a list of rules.
pub fn none_of(rules: Vec<BoxedRule>) -> NoneOf {
    NoneOf::new(rules)
}
