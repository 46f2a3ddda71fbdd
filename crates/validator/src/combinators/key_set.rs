//! KEY-SET navigator - the input's members must match a declared set

use serde_json::{Map, Value};

use crate::combinators::key::Key;
use crate::foundation::{Context, Rule, ValidationError};
use crate::params;

/// Validates that an object has exactly the declared members.
///
/// Every [`Key`] is evaluated as usual, so a missing mandatory key and a
/// failing nested rule are both reported. Members that no key declares are
/// reported as `keyNotAllowed`. Children appear in key declaration order,
/// followed by unexpected members in input order.
///
/// The report's `expected`, `missing` and `extra` params list the declared
/// keys, the absent mandatory keys and the unexpected members, comma
/// separated.
///
/// Non-objects are rejected with an `objectType` report.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = key_set(vec![key("id", int_type()), key_exists("name")]);
/// assert!(rule.check(&json!({"id": 1, "name": "x"})));
///
/// let error = rule.assert(&json!({"id": 1, "admin": true})).unwrap_err();
/// assert_eq!(error.param("missing"), Some("name"));
/// assert_eq!(error.param("extra"), Some("admin"));
/// ```
#[derive(Debug, Default)]
pub struct KeySet {
    keys: Vec<Key>,
}

impl KeySet {
    /// Creates a new `KeySet` navigator.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Returns the declared keys.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn is_declared(&self, name: &str) -> bool {
        self.keys.iter().any(|key| key.name() == name)
    }

    fn extra<'v>(&self, members: &'v Map<String, Value>) -> impl Iterator<Item = &'v str> {
        members
            .keys()
            .map(String::as_str)
            .filter(|name| !self.is_declared(name))
    }
}

impl Rule for KeySet {
    fn id(&self) -> &str {
        "keySet"
    }

    fn check(&self, input: &Value) -> bool {
        let Some(members) = input.as_object() else {
            return false;
        };
        self.keys.iter().all(|key| key.check(input)) && self.extra(members).next().is_none()
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let Some(members) = input.as_object() else {
            return Err(ctx.reject("objectType", params!(), input));
        };

        let mut children: Vec<ValidationError> = self
            .keys
            .iter()
            .filter_map(|key| key.evaluate(input, ctx).err())
            .collect();

        let extra: Vec<&str> = self.extra(members).collect();
        children.extend(extra.iter().map(|name| {
            ctx.key(name)
                .reject("keyNotAllowed", params! { "key" => name }, input)
        }));

        if children.is_empty() {
            return Ok(());
        }

        let expected: Vec<&str> = self.keys.iter().map(Key::name).collect();
        let missing: Vec<&str> = self
            .keys
            .iter()
            .filter(|key| key.is_mandatory() && !members.contains_key(key.name()))
            .map(Key::name)
            .collect();

        let params = params! {
            "expected" => expected.join(", "),
            "missing" => missing.join(", "),
            "extra" => extra.join(", "),
        };
        Err(ctx.reject_with_children(self.id(), params, input, children))
    }
}

/// Creates a `KeySet` navigator from its keys.
pub fn key_set(keys: Vec<Key>) -> KeySet {
    KeySet::new(keys)
}
