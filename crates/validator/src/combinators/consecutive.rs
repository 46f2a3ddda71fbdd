//! CONSECUTIVE combinator - short-circuiting chain of rules

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};

/// Evaluates rules in order and stops at the first failure.
///
/// Unlike [`AllOf`](crate::combinators::AllOf), later rules are never run
/// once one fails, and the result is that rule's report unchanged. Handy
/// when later rules only make sense if earlier ones hold (a type check
/// before a range check).
///
/// With no children, `Consecutive` passes.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = consecutive(vec![string_type().boxed(), not_empty().boxed()]);
/// let error = rule.assert(&json!(5)).unwrap_err();
/// assert_eq!(error.id, "stringType");
/// ```
#[derive(Debug, Default)]
pub struct Consecutive {
    rules: Vec<BoxedRule>,
}

impl Consecutive {
    /// Creates a new `Consecutive` combinator.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Appends another rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn then<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the child rules.
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }
}

impl Rule for Consecutive {
    fn id(&self) -> &str {
        "consecutive"
    }

    fn check(&self, input: &Value) -> bool {
        self.rules.iter().all(|rule| rule.check(input))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.evaluate(input, ctx))
    }
}

/// Creates a `Consecutive` combinator from a list of rules.
pub fn consecutive(rules: Vec<BoxedRule>) -> Consecutive {
    Consecutive::new(rules)
}
