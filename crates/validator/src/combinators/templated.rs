//! TEMPLATED combinator - per-instance message override

use serde_json::Value;

use crate::foundation::{Context, Params, Rule, ValidationError};

// ============================================================================
// TEMPLATED COMBINATOR
// ============================================================================

/// Renders the wrapped rule's report with a custom pattern.
///
/// Only the top report node is re-rendered, from that node's own params; its
/// identifier, params and children are kept, so consumers still see why the
/// rule failed. Overrides set on the enclosing tree are not consulted for
/// this node.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = positive().with_template("{name} needs to be above zero");
/// let error = rule.assert(&json!(-3)).unwrap_err();
///
/// assert_eq!(error.id, "positive");
/// assert_eq!(error.message, "-3 needs to be above zero");
/// ```
#[derive(Debug, Clone)]
pub struct Templated<R> {
    inner: R,
    pattern: String,
}

impl<R> Templated<R> {
    /// Creates a new `Templated` combinator.
    pub fn new(inner: R, pattern: impl Into<String>) -> Self {
        Self {
            inner,
            pattern: pattern.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for Templated<R> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn check(&self, input: &Value) -> bool {
        self.inner.check(input)
    }

    fn params(&self) -> Params {
        self.inner.params()
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        self.inner
            .evaluate(input, ctx)
            .map_err(|original| original.rerender(&self.pattern))
    }
}

/// Creates a `Templated` combinator.
pub fn with_template<R: Rule>(rule: R, pattern: impl Into<String>) -> Templated<R> {
    Templated::new(rule, pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::all_of;
    use crate::foundation::{RuleExt, TemplateSet};
    use crate::validators::{int_type, min, positive};
    use serde_json::json;

    #[test]
    fn test_keeps_children_and_params() {
        let rule = with_template(
            all_of(vec![int_type().boxed(), positive().boxed()]),
            "{name}: {failed} of {total} checks failed",
        );
        let err = rule.assert(&json!("x")).unwrap_err();

        assert_eq!(err.id, "allOf");
        assert_eq!(err.message, "\"x\": 2 of 2 checks failed");
        assert_eq!(err.children.len(), 2);
        assert_eq!(err.children[0].message, "\"x\" must be an integer");
    }

    #[test]
    fn test_instance_pattern_beats_tree_override() {
        let templates = TemplateSet::new().with("min", "tree says {compare_to}");
        let root = Context::default();
        let ctx = root.with_templates(&templates);

        let rule = min(json!(5)).with_template("instance says {compare_to}");
        let err = rule.evaluate(&json!(1), &ctx).unwrap_err();
        assert_eq!(err.message, "instance says 5");
    }

    #[test]
    fn test_passing_input_untouched() {
        let rule = positive().with_template("never shown");
        assert!(rule.assert(&json!(1)).is_ok());
        assert_eq!(rule.pattern(), "never shown");
    }
}
