//! LAZY combinator - rule chosen from the input at evaluation time

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Builds the rule to apply from the input itself.
///
/// Useful for:
/// - Rules whose configuration depends on another part of the input
/// - Recursive structures, where the rule refers to itself
///
/// The factory runs on every evaluation, so it should be cheap. The built
/// rule's report is returned unchanged.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sieve_validator::prelude::*;
///
/// // `confirm` must equal `password`
/// let rule = lazy(|input: &Value| {
///     let password = input.get("password").cloned().unwrap_or(Value::Null);
///     key("confirm", equals(password)).boxed()
/// });
///
/// assert!(rule.check(&json!({"password": "s3cret", "confirm": "s3cret"})));
/// assert!(!rule.check(&json!({"password": "s3cret", "confirm": "secret"})));
/// ```
pub struct Lazy<F>
where
    F: Fn(&Value) -> BoxedRule + Send + Sync,
{
    factory: F,
}

impl<F> Lazy<F>
where
    F: Fn(&Value) -> BoxedRule + Send + Sync,
{
    /// Creates a new LAZY combinator.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> Rule for Lazy<F>
where
    F: Fn(&Value) -> BoxedRule + Send + Sync,
{
    fn id(&self) -> &str {
        "lazy"
    }

    fn check(&self, input: &Value) -> bool {
        (self.factory)(input).check(input)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        (self.factory)(input).evaluate(input, ctx)
    }
}

// Manual Debug impl since F does not implement Debug
impl<F> std::fmt::Debug for Lazy<F>
where
    F: Fn(&Value) -> BoxedRule + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<F>(factory: F) -> Lazy<F>
where
    F: Fn(&Value) -> BoxedRule + Send + Sync,
{
    Lazy::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================
