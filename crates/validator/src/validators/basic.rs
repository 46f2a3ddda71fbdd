//! Constant, equality and callback validators

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Rule, value};
use crate::params;

crate::rule! {
    /// Accepts every input.
    pub AlwaysValid = "alwaysValid";
    check(_input) { true }
    fn always_valid();
}

crate::rule! {
    /// Rejects every input.
    pub AlwaysInvalid = "alwaysInvalid";
    check(_input) { false }
    fn always_invalid();
}

crate::rule! {
    /// Validates that the input equals a value.
    ///
    /// Numbers compare by value, so `1` equals `1.0`.
    pub Equals { compare_to: Value } = "equals";
    check(self, input) { value::equals(input, &self.compare_to) }
    params(self) { params! { "compare_to" => self.compare_to } }
    new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
    fn equals(compare_to: impl Into<Value>);
}

// ============================================================================
// CALLBACK
// ============================================================================

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Validates the input with an arbitrary predicate.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sieve_validator::prelude::*;
///
/// let rule = callback(|input: &Value| input.as_str().is_some_and(|s| s.contains('@')));
/// assert!(rule.check(&json!("a@b")));
/// assert_eq!(rule.assert(&json!("ab")).unwrap_err().id, "callback");
/// ```
#[derive(Clone)]
pub struct Callback {
    predicate: Predicate,
}

impl Callback {
    /// Creates a new callback rule.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl Rule for Callback {
    fn id(&self) -> &str {
        "callback"
    }

    fn check(&self, input: &Value) -> bool {
        (self.predicate)(input)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("predicate", &"<function>")
            .finish()
    }
}

/// Creates a callback rule.
pub fn callback<F>(predicate: F) -> Callback
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Callback::new(predicate)
}
