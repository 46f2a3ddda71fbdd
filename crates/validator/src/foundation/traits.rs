//! Core traits for the validation system
//!
//! This module defines the contract every rule satisfies, whether it is a
//! leaf predicate, a combinator, or a navigator.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Context, Params, ValidationError, Validity};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The contract all rules implement.
///
/// A leaf rule only has to provide [`id`](Rule::id) and [`check`](Rule::check)
/// (plus [`params`](Rule::params) when its configuration shows up in
/// messages); the default [`evaluate`](Rule::evaluate) turns a negative check
/// into a report. Combinators and navigators override `evaluate` to attach
/// the reports of their children.
///
/// `check(x)` is `true` exactly when `evaluate(x, ctx)` is `Ok` for any
/// context.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sieve_validator::foundation::Rule;
///
/// #[derive(Debug)]
/// struct Adult;
///
/// impl Rule for Adult {
///     fn id(&self) -> &str {
///         "adult"
///     }
///
///     fn check(&self, input: &Value) -> bool {
///         input.as_u64().is_some_and(|age| age >= 18)
///     }
/// }
///
/// assert!(Adult.check(&json!(21)));
/// let error = Adult.assert(&json!(12)).unwrap_err();
/// assert_eq!(error.id, "adult");
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable identifier, used for template lookup.
    fn id(&self) -> &str;

    /// Returns whether `input` satisfies the rule.
    ///
    /// Must be a pure function of the rule's configuration and the input.
    fn check(&self, input: &Value) -> bool;

    /// Named parameters this rule contributes to its message.
    fn params(&self) -> Params {
        Params::new()
    }

    /// Evaluates `input`, producing the report rooted at this rule on
    /// rejection.
    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        if self.check(input) {
            Ok(())
        } else {
            Err(ctx.reject(self.id(), self.params(), input))
        }
    }

    /// Evaluates `input` with default templates and no path.
    fn assert(&self, input: &Value) -> Result<(), ValidationError> {
        self.evaluate(input, &Context::default())
    }

    /// Like [`assert`](Rule::assert), as a [`Validity`].
    fn validate(&self, input: &Value) -> Validity {
        self.assert(input).into()
    }
}

/// A type-erased rule, as held by combinators.
pub type BoxedRule = Box<dyn Rule>;

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn check(&self, input: &Value) -> bool {
        (**self).check(input)
    }

    fn params(&self) -> Params {
        (**self).params()
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        (**self).evaluate(input, ctx)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn check(&self, input: &Value) -> bool {
        (**self).check(input)
    }

    fn params(&self) -> Params {
        (**self).params()
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        (**self).evaluate(input, ctx)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn check(&self, input: &Value) -> bool {
        (**self).check(input)
    }

    fn params(&self) -> Params {
        (**self).params()
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        (**self).evaluate(input, ctx)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every sized, `'static` [`Rule`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = int_type().and(positive()).and(even());
/// assert!(rule.check(&json!(4)));
/// assert!(!rule.check(&json!(3)));
/// ```
pub trait RuleExt: Rule + Sized + 'static {
    /// Both rules must pass. Chaining `.and` on an [`AllOf`] appends to it.
    fn and<R: Rule + 'static>(self, other: R) -> AllOf {
        AllOf::new(vec![Box::new(self), Box::new(other)])
    }

    /// At least one rule must pass. Chaining `.or` on an [`AnyOf`] appends to it.
    fn or<R: Rule + 'static>(self, other: R) -> AnyOf {
        AnyOf::new(vec![Box::new(self), Box::new(other)])
    }

    /// Inverts the rule.
    fn not(self) -> Not {
        Not::new(self)
    }

    /// Accepts empty inputs without evaluating the rule.
    fn optional(self) -> Optional {
        Optional::new(self)
    }

    /// Accepts `null` without evaluating the rule.
    fn nullable(self) -> Nullable {
        Nullable::new(self)
    }

    /// Applies the rule to every element of an array or object.
    fn each(self) -> Each {
        Each::new(self)
    }

    /// Renders this rule's report with `pattern` instead of its template.
    fn with_template(self, pattern: impl Into<String>) -> Templated<Self> {
        Templated::new(self, pattern)
    }

    /// Erases the rule's type.
    fn boxed(self) -> BoxedRule {
        Box::new(self)
    }
}

impl<T: Rule + Sized + 'static> RuleExt for T {}

pub use crate::combinators::{AllOf, AnyOf, Each, Not, Nullable, Optional, Templated};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn id(&self) -> &str {
            "alwaysValid"
        }

        fn check(&self, _input: &Value) -> bool {
            true
        }
    }

    #[derive(Debug)]
    struct NonNegative;

    impl Rule for NonNegative {
        fn id(&self) -> &str {
            "nonNegative"
        }

        fn check(&self, input: &Value) -> bool {
            input.as_f64().is_some_and(|n| n >= 0.0)
        }
    }

    #[test]
    fn test_default_evaluate_matches_check() {
        for input in [json!(1), json!(-1), json!("x"), json!(null)] {
            assert_eq!(NonNegative.check(&input), NonNegative.assert(&input).is_ok());
        }
    }

    #[test]
    fn test_default_report_uses_fallback_template() {
        let err = NonNegative.assert(&json!(-2)).unwrap_err();
        assert_eq!(err.id, "nonNegative");
        assert_eq!(err.message, "-2 is not valid for rule \"nonNegative\"");
    }

    #[test]
    fn test_boxed_and_arc_delegate() {
        let boxed: BoxedRule = Box::new(NonNegative);
        assert_eq!(boxed.id(), "nonNegative");
        assert!(!boxed.check(&json!(-1)));

        let shared: Arc<dyn Rule> = Arc::new(AlwaysValid);
        assert!(shared.validate(&json!(null)).is_valid());
    }

    #[test]
    fn test_ext_and_or() {
        let both = AlwaysValid.and(NonNegative);
        assert!(both.check(&json!(1)));
        assert!(!both.check(&json!(-1)));

        let either = NonNegative.or(AlwaysValid);
        assert!(either.check(&json!(-1)));
    }
}
