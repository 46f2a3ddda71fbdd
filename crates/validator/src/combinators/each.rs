//! EACH combinator - validates each element of a collection

use serde_json::Value;

use crate::foundation::{BoxedRule, Context, Rule, ValidationError};
use crate::params;

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a collection.
///
/// Arrays are walked by index and objects by member, in order. Every failing
/// element contributes one child report whose path ends with that element's
/// index (`[2]`) or key (`.name`). An empty collection passes.
///
/// Inputs that are neither arrays nor objects are rejected with an
/// `iterableType` report.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = each(positive());
/// assert!(rule.check(&json!([1, 2, 3])));
///
/// let error = rule.assert(&json!([1, -2, -3])).unwrap_err();
/// assert_eq!(error.children.len(), 2);
/// assert_eq!(error.children[0].path.as_deref(), Some("[1]"));
/// ```
#[derive(Debug)]
pub struct Each {
    inner: BoxedRule,
    fail_fast: bool,
}

impl Each {
    /// Creates a new EACH combinator.
    ///
    /// By default, validates all elements and collects all errors.
    pub fn new<R: Rule + 'static>(inner: R) -> Self {
        Self {
            inner: Box::new(inner),
            fail_fast: false,
        }
    }

    /// Sets whether to stop on the first failing element.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &dyn Rule {
        self.inner.as_ref()
    }

    fn evaluate_elements<'v>(
        &self,
        elements: impl Iterator<Item = (Element<'v>, &'v Value)>,
        ctx: &Context<'_>,
    ) -> (usize, Vec<ValidationError>) {
        let mut total = 0;
        let mut errors = Vec::new();

        for (element, item) in elements {
            total += 1;
            let result = match element {
                Element::Index(index) => self.inner.evaluate(item, &ctx.index(index)),
                Element::Key(key) => self.inner.evaluate(item, &ctx.key(key)),
            };
            if let Err(e) = result {
                errors.push(e);
                if self.fail_fast {
                    break;
                }
            }
        }

        (total, errors)
    }
}

#[derive(Clone, Copy)]
enum Element<'v> {
    Index(usize),
    Key(&'v str),
}

impl Rule for Each {
    fn id(&self) -> &str {
        "each"
    }

    fn check(&self, input: &Value) -> bool {
        match input {
            Value::Array(items) => items.iter().all(|item| self.inner.check(item)),
            Value::Object(map) => map.values().all(|item| self.inner.check(item)),
            _ => false,
        }
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let (total, errors) = match input {
            Value::Array(items) => self.evaluate_elements(
                items.iter().enumerate().map(|(i, item)| (Element::Index(i), item)),
                ctx,
            ),
            Value::Object(map) => self.evaluate_elements(
                map.iter().map(|(k, item)| (Element::Key(k.as_str()), item)),
                ctx,
            ),
            _ => return Err(ctx.reject("iterableType", params!(), input)),
        };

        if errors.is_empty() {
            return Ok(());
        }

        let params = params! {
            "failed" => errors.len(),
            "total" => total,
        };
        Err(ctx.reject_with_children(self.id(), params, input, errors))
    }
}

/// Creates an EACH combinator that validates all elements.
pub fn each<R: Rule + 'static>(rule: R) -> Each {
    Each::new(rule)
}

/// Creates an EACH combinator that stops on the first failing element.
pub fn each_fail_fast<R: Rule + 'static>(rule: R) -> Each {
    Each::new(rule).with_fail_fast(true)
}

// ============================================================================
// TESTS
// ============================================================================
