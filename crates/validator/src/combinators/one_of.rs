//! ONE-OF combinator - exclusive disjunction of rules

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Passes when exactly one child rule passes.
///
/// Every child is evaluated, since a second match is also a failure. The two
/// failure modes have distinct identifiers:
///
/// - `oneOf`: nothing matched; children are every child's report.
/// - `oneOfMultiple`: more than one matched; the `matched` param counts the
///   matching children, `matched_indices` lists them, and children are the
///   reports of the ones that did fail, if any.
///
/// A tree-level override for `oneOfMultiple` renders the second case. Without
/// one, an override for `oneOf` renders both cases, so customizing `oneOf`
/// alone never leaves part of its messages on the defaults.
///
/// With no children, `OneOf` fails.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = one_of![even(), negative()];
/// assert!(rule.check(&json!(4)));   // even only
/// assert!(!rule.check(&json!(-4))); // both
/// assert!(!rule.check(&json!(3)));  // neither
/// ```
#[derive(Debug, Default)]
pub struct OneOf {
    rules: Vec<BoxedRule>,
}

impl OneOf {
    /// Creates a new `OneOf` combinator.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Returns the alternatives.
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }
}

impl Rule for OneOf {
    fn id(&self) -> &str {
        "oneOf"
    }

    fn check(&self, input: &Value) -> bool {
        self.rules.iter().filter(|rule| rule.check(input)).count() == 1
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let mut matched = Vec::new();
        let mut failures = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            match rule.evaluate(input, ctx) {
                Ok(()) => matched.push(index),
                Err(e) => failures.push(e),
            }
        }

        match matched.len() {
            1 => Ok(()),
            0 => {
                let params = params! { "total" => self.rules.len() };
                Err(ctx.reject_with_children(self.id(), params, input, failures))
            }
            count => {
                let indices: Vec<String> = matched.iter().map(ToString::to_string).collect();
                let params = params! {
                    "matched" => count,
                    "matched_indices" => indices.join(", "),
                    "total" => self.rules.len(),
                };
                let pattern = ctx
                    .template_override("oneOfMultiple")
                    .or_else(|| ctx.template_override(self.id()))
                    .unwrap_or_else(|| ctx.template("oneOfMultiple"));
                Err(ctx
                    .reject_with_template("oneOfMultiple", pattern, params, input)
                    .with_children(failures))
            }
        }
    }
}

/// Creates a `OneOf` combinator from a list of rules.
pub fn one_of(rules: Vec<BoxedRule>) -> OneOf {
    OneOf::new(rules)
}
