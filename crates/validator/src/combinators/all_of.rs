//! ALL-OF combinator - logical conjunction of rules
//!
//! This module provides the [`AllOf`] combinator: every child rule must pass
//! for the combined rule to pass.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let rule = all_of![int_type(), positive(), even()];
//! assert!(rule.check(&json!(4)));
//!
//! let error = rule.assert(&json!(-3)).unwrap_err();
//! assert_eq!(error.children.len(), 2); // positive, even
//! ```

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Combines rules with logical AND.
///
/// [`check`](Rule::check) stops at the first failing child. [`evaluate`]
/// runs every child and reports all failing ones, in declaration order.
///
/// With no children, `AllOf` passes (vacuous truth).
///
/// [`evaluate`]: Rule::evaluate
#[derive(Debug, Default)]
pub struct AllOf {
    rules: Vec<BoxedRule>,
}

impl AllOf {
    /// Creates a new `AllOf` combinator.
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Appends another rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::prelude::*;
    ///
    /// let rule = int_type().and(positive()).and(even());
    /// assert_eq!(rule.rules().len(), 3);
    /// ```
    pub fn and<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    /// Appends another rule in place.
    pub fn push<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the child rules.
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Extracts the child rules.
    pub fn into_rules(self) -> Vec<BoxedRule> {
        self.rules
    }
}

impl Rule for AllOf {
    fn id(&self) -> &str {
        "allOf"
    }

    fn check(&self, input: &Value) -> bool {
        self.rules.iter().all(|rule| rule.check(input))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let failures: Vec<ValidationError> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(input, ctx).err())
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        let params = params! {
            "failed" => failures.len(),
            "total" => self.rules.len(),
        };
        Err(ctx.reject_with_children(self.id(), params, input, failures))
    }
}

/// Creates an `AllOf` combinator from a list of rules.
///
/// See also the [`all_of!`](crate::all_of!) macro, which boxes its arguments.
pub fn all_of(rules: Vec<BoxedRule>) -> AllOf {
    AllOf::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::validators::{even, int_type, positive};
    use serde_json::json;

    #[test]
    fn test_all_pass() {
        let rule = all_of(vec![int_type().boxed(), positive().boxed()]);
        assert!(rule.check(&json!(3)));
        assert!(rule.assert(&json!(3)).is_ok());
    }

    #[test]
    fn test_reports_every_failing_child_in_order() {
        let rule = int_type().and(positive()).and(even());
        let err = rule.assert(&json!(-3)).unwrap_err();

        assert_eq!(err.id, "allOf");
        let ids: Vec<_> = err.children.iter().map(|e| e.id.as_ref()).collect();
        assert_eq!(ids, ["positive", "even"]);
        assert_eq!(err.param("failed"), Some("2"));
        assert_eq!(err.param("total"), Some("3"));
    }

    #[test]
    fn test_message_from_default_template() {
        let rule = positive().and(even());
        let err = rule.assert(&json!(-3)).unwrap_err();
        assert_eq!(err.message, "All of the required rules must pass for -3");
    }

    #[test]
    fn test_empty_is_vacuously_true() {
        let rule = AllOf::default();
        assert!(rule.check(&json!(null)));
        assert!(rule.assert(&json!("anything")).is_ok());
    }

    #[test]
    fn test_chained_and_appends() {
        let rule = positive().and(even()).and(int_type());
        assert_eq!(rule.rules().len(), 3);
        assert_eq!(rule.into_rules().len(), 3);
    }
}
