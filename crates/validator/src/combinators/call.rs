//! CALL combinator - validates a transformed input

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

/// Transforms the input, then validates the result with a nested rule.
///
/// A transform returning `None` means the input could not be converted; the
/// rule then rejects with a `call` report instead of running the nested
/// rule.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sieve_validator::prelude::*;
///
/// // Numeric strings, validated as numbers
/// let rule = call(
///     |input: &Value| input.as_str()?.parse::<i64>().ok().map(Value::from),
///     positive(),
/// );
///
/// assert!(rule.check(&json!("42")));
/// assert!(!rule.check(&json!("-1")));
/// assert_eq!(rule.assert(&json!("n/a")).unwrap_err().id, "call");
/// ```
pub struct Call<F>
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    transform: F,
    inner: BoxedRule,
}

impl<F> Call<F>
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    /// Creates a new `Call` combinator.
    pub fn new<R: Rule + 'static>(transform: F, inner: R) -> Self {
        Self {
            transform,
            inner: Box::new(inner),
        }
    }

    /// Returns a reference to the nested rule.
    pub fn inner(&self) -> &dyn Rule {
        self.inner.as_ref()
    }
}

impl<F> Rule for Call<F>
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    fn id(&self) -> &str {
        "call"
    }

    fn check(&self, input: &Value) -> bool {
        (self.transform)(input).is_some_and(|value| self.inner.check(&value))
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        match (self.transform)(input) {
            Some(value) => self.inner.evaluate(&value, ctx),
            None => Err(ctx.reject(self.id(), params!(), input)),
        }
    }
}

// Manual Debug impl since F does not implement Debug
impl<F> std::fmt::Debug for Call<F>
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Creates a `Call` combinator.
pub fn call<F, R>(transform: F, rule: R) -> Call<F>
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
    R: Rule + 'static,
{
    Call::new(transform, rule)
}
