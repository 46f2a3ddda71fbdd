//! KEY navigators - validate members of composite inputs
//!
//! The navigators in this module extract a member from the input and
//! delegate to a nested rule:
//!
//! - [`Key`] - an object member, or an array element when the key is an index
//! - [`Property`] - an object member only
//! - [`KeyNested`] - a member reached through a dotted/bracketed [`KeyPath`]
//!
//! A navigator adds no report level of its own when the nested rule fails:
//! the nested report is returned with the member's path attached. A missing
//! mandatory member is reported as `keyExists` (`propertyExists` for
//! [`Property`]) without running the nested rule.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let rule = key("age", greater_than(0));
//!
//! assert!(rule.check(&json!({"age": 30})));
//!
//! let error = rule.assert(&json!({"name": "x"})).unwrap_err();
//! assert_eq!(error.id, "keyExists");
//! assert_eq!(error.message, "age must be present");
//! ```

use serde_json::Value;

use crate::combinators::key_path::KeyPath;
use crate::foundation::{BoxedRule, ConfigError, Context, Rule, ValidationError};
use crate::params;

// ============================================================================
// SHARED NAVIGATION
// ============================================================================

/// Evaluates the outcome of looking `segment` up in `input`.
///
/// `ctx` is already positioned on the member.
fn navigate(
    found: Option<&Value>,
    segment: &str,
    missing_id: &str,
    rule: Option<&dyn Rule>,
    mandatory: bool,
    input: &Value,
    ctx: &Context<'_>,
) -> Result<(), ValidationError> {
    match (found, rule) {
        (None, _) if mandatory => {
            Err(ctx.reject(missing_id, params! { "key" => segment }, input))
        }
        (None, _) | (Some(_), None) => Ok(()),
        (Some(member), Some(rule)) => rule.evaluate(member, ctx),
    }
}

fn check_member(found: Option<&Value>, rule: Option<&dyn Rule>, mandatory: bool) -> bool {
    match found {
        None => !mandatory,
        Some(member) => rule.is_none_or(|rule| rule.check(member)),
    }
}

// ============================================================================
// KEY
// ============================================================================

/// Validates a member of an object, or an element of an array.
///
/// On arrays the key must be a decimal index (`"0"`, `"12"`), and reports
/// tag the element as `[index]`, the way [`Each`](crate::combinators::Each) does.
#[derive(Debug)]
pub struct Key {
    name: String,
    rule: Option<BoxedRule>,
    mandatory: bool,
}

impl Key {
    /// Creates a new key navigator.
    ///
    /// Without a nested rule only the member's existence is checked.
    pub fn new(name: impl Into<String>, rule: Option<BoxedRule>, mandatory: bool) -> Self {
        Self {
            name: name.into(),
            rule,
            mandatory,
        }
    }

    /// Returns the member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether a missing member is a failure.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    fn index(&self) -> Option<usize> {
        self.name.parse().ok()
    }

    fn lookup<'v>(&self, input: &'v Value) -> Option<&'v Value> {
        match input {
            Value::Object(members) => members.get(&self.name),
            Value::Array(items) => self.index().and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl Rule for Key {
    fn id(&self) -> &str {
        "key"
    }

    fn check(&self, input: &Value) -> bool {
        check_member(self.lookup(input), self.rule.as_deref(), self.mandatory)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        // Array elements are tagged the way `Each` tags them.
        let ctx = match (input, self.index()) {
            (Value::Array(_), Some(index)) => ctx.index(index),
            _ => ctx.key(&self.name),
        };
        navigate(
            self.lookup(input),
            &self.name,
            "keyExists",
            self.rule.as_deref(),
            self.mandatory,
            input,
            &ctx,
        )
    }
}

// ============================================================================
// PROPERTY
// ============================================================================

/// Validates a member of an object.
///
/// Unlike [`Key`], arrays never have properties.
#[derive(Debug)]
pub struct Property {
    name: String,
    rule: Option<BoxedRule>,
    mandatory: bool,
}

impl Property {
    /// Creates a new property navigator.
    pub fn new(name: impl Into<String>, rule: Option<BoxedRule>, mandatory: bool) -> Self {
        Self {
            name: name.into(),
            rule,
            mandatory,
        }
    }

    /// Returns the property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn lookup<'v>(&self, input: &'v Value) -> Option<&'v Value> {
        input.as_object().and_then(|members| members.get(&self.name))
    }
}

impl Rule for Property {
    fn id(&self) -> &str {
        "property"
    }

    fn check(&self, input: &Value) -> bool {
        check_member(self.lookup(input), self.rule.as_deref(), self.mandatory)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        navigate(
            self.lookup(input),
            &self.name,
            "propertyExists",
            self.rule.as_deref(),
            self.mandatory,
            input,
            &ctx.key(&self.name),
        )
    }
}

// ============================================================================
// KEY NESTED
// ============================================================================

/// Validates a member reached through a dotted/bracketed path.
///
/// See [`KeyPath`] for the syntax and how literal keys containing `.` are
/// matched. Reports carry the path as written.
#[derive(Debug)]
pub struct KeyNested {
    path: KeyPath,
    rule: Option<BoxedRule>,
    mandatory: bool,
}

impl KeyNested {
    /// Creates a new nested-key navigator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyPath`] if `path` cannot be parsed.
    pub fn new(path: &str, rule: Option<BoxedRule>, mandatory: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            path: KeyPath::parse(path)?,
            rule,
            mandatory,
        })
    }

    /// Returns the parsed path.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }
}

impl Rule for KeyNested {
    fn id(&self) -> &str {
        "keyNested"
    }

    fn check(&self, input: &Value) -> bool {
        check_member(self.path.resolve(input), self.rule.as_deref(), self.mandatory)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        navigate(
            self.path.resolve(input),
            self.path.as_str(),
            "keyExists",
            self.rule.as_deref(),
            self.mandatory,
            input,
            &ctx.key(self.path.as_str()),
        )
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Validates the mandatory member `name` with `rule`.
pub fn key<R: Rule + 'static>(name: impl Into<String>, rule: R) -> Key {
    Key::new(name, Some(Box::new(rule)), true)
}

/// Validates the member `name` with `rule` when it is present.
pub fn key_optional<R: Rule + 'static>(name: impl Into<String>, rule: R) -> Key {
    Key::new(name, Some(Box::new(rule)), false)
}

/// Checks only that the member `name` is present.
pub fn key_exists(name: impl Into<String>) -> Key {
    Key::new(name, None, true)
}

/// Validates the mandatory property `name` with `rule`.
pub fn property<R: Rule + 'static>(name: impl Into<String>, rule: R) -> Property {
    Property::new(name, Some(Box::new(rule)), true)
}

/// Validates the property `name` with `rule` when it is present.
pub fn property_optional<R: Rule + 'static>(name: impl Into<String>, rule: R) -> Property {
    Property::new(name, Some(Box::new(rule)), false)
}

/// Validates the mandatory member at `path` with `rule`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidKeyPath`] if `path` cannot be parsed.
pub fn key_nested<R: Rule + 'static>(path: &str, rule: R) -> Result<KeyNested, ConfigError> {
    KeyNested::new(path, Some(Box::new(rule)), true)
}

/// Validates the member at `path` with `rule` when it is present.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidKeyPath`] if `path` cannot be parsed.
pub fn key_nested_optional<R: Rule + 'static>(
    path: &str,
    rule: R,
) -> Result<KeyNested, ConfigError> {
    KeyNested::new(path, Some(Box::new(rule)), false)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{greater_than, int_type, not_empty, positive, string_type};
    use serde_json::json;

    #[test]
    fn test_missing_mandatory_member_does_not_delegate() {
        let rule = key("age", greater_than(0));
        let err = rule.assert(&json!({"name": "x"})).unwrap_err();

        assert_eq!(err.id, "keyExists");
        assert_eq!(err.path.as_deref(), Some("age"));
        assert_eq!(err.param("key"), Some("age"));
        assert!(err.children.is_empty());
    }

    #[test]
    fn test_missing_optional_member_passes() {
        let rule = key_optional("age", greater_than(0));
        assert!(rule.check(&json!({})));
        assert!(rule.assert(&json!({})).is_ok());
    }

    #[test]
    fn test_present_member_delegates_with_path() {
        let rule = key("age", greater_than(0));
        let err = rule.assert(&json!({"age": -1})).unwrap_err();

        assert_eq!(err.id, "greaterThan");
        assert_eq!(err.path.as_deref(), Some("age"));
        assert_eq!(err.message, "age must be greater than 0");
        assert_eq!(err.input, "-1");
    }

    #[test]
    fn test_existence_only() {
        let rule = key_exists("id");
        assert!(rule.check(&json!({"id": null})));
        assert!(!rule.check(&json!({"other": 1})));
        assert!(!rule.check(&json!("not an object")));
    }

    #[test]
    fn test_key_indexes_arrays() {
        let rule = key("1", string_type());
        assert!(rule.check(&json!([0, "one"])));
        assert!(!rule.check(&json!([0, 1])));
        assert!(!rule.check(&json!([0])));
    }

    #[test]
    fn test_property_ignores_arrays() {
        let rule = property("0", int_type());
        assert!(!rule.check(&json!([1])));

        let err = rule.assert(&json!([1])).unwrap_err();
        assert_eq!(err.id, "propertyExists");
    }

    #[test]
    fn test_nested_keys_build_paths() {
        let rule = key("user", key("tags", key("2", not_empty())));
        let err = rule
            .assert(&json!({"user": {"tags": ["a", "b", ""]}}))
            .unwrap_err();
        assert_eq!(err.path.as_deref(), Some("user.tags[2]"));

        let err = rule.assert(&json!({"user": {"tags": ["a"]}})).unwrap_err();
        assert_eq!(err.id, "keyExists");
        assert_eq!(err.path.as_deref(), Some("user.tags[2]"));

        // numeric member names of objects stay members
        let err = rule
            .assert(&json!({"user": {"tags": {"2": ""}}}))
            .unwrap_err();
        assert_eq!(err.path.as_deref(), Some("user.tags.2"));
    }

    #[test]
    fn test_array_paths_match_each_and_resolve() {
        let element = key("tags", key("1", not_empty()));
        let every = key("tags", crate::combinators::each(not_empty()));
        let input = json!({"tags": ["a", ""]});

        let by_key = element.assert(&input).unwrap_err();
        let by_each = every.assert(&input).unwrap_err();
        assert_eq!(by_key.path, by_each.children[0].path);

        let path = KeyPath::parse(by_key.path.as_deref().unwrap()).unwrap();
        assert_eq!(path.resolve(&input), Some(&json!("")));
    }

    #[test]
    fn test_key_nested() {
        let rule = key_nested("user.address.zip", positive()).unwrap();
        assert!(rule.check(&json!({"user": {"address": {"zip": 12}}})));

        let err = rule
            .assert(&json!({"user": {"address": {"zip": -1}}}))
            .unwrap_err();
        assert_eq!(err.path.as_deref(), Some("user.address.zip"));

        let err = rule.assert(&json!({"user": {}})).unwrap_err();
        assert_eq!(err.id, "keyExists");
        assert_eq!(err.message, "user.address.zip must be present");
    }

    #[test]
    fn test_key_nested_rejects_bad_path() {
        assert!(key_nested("a..b", positive()).is_err());
    }

    #[test]
    fn test_key_nested_optional() {
        let rule = key_nested_optional("a[0]", positive()).unwrap();
        assert!(rule.check(&json!({"a": []})));
        assert!(!rule.check(&json!({"a": [-1]})));
    }
}
