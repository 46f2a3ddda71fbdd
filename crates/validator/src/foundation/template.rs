//! Message templates
//!
//! A template is a pattern with `{param}` placeholders. Reports are rendered
//! from the first template found for the rule identifier, looking at:
//!
//! 1. the [`TemplateSet`] overrides attached to the innermost tree, then the
//!    enclosing trees',
//! 2. the built-in default table,
//! 3. [`FALLBACK_TEMPLATE`].
//!
//! Rendering never fails. A placeholder with no matching parameter is
//! rendered as `{?param}`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Pattern used when neither an override nor a default exists for an identifier.
pub const FALLBACK_TEMPLATE: &str = "{name} is not valid for rule \"{id}\"";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Built-in templates, keyed by rule identifier.
static DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    // combinators
    ("allOf", "All of the required rules must pass for {name}"),
    ("anyOf", "At least one of these rules must pass for {name}"),
    ("oneOf", "Only one of these rules must pass for {name}"),
    (
        "oneOfMultiple",
        "Only one of these rules must pass for {name}, but {matched} passed",
    ),
    ("noneOf", "None of these rules must pass for {name}"),
    ("not", "{name} must not pass the \"{rule}\" rule"),
    ("each", "Each item in {name} must be valid"),
    ("iterableType", "{name} must be iterable"),
    ("call", "{name} could not be transformed for validation"),
    // navigators
    ("keyExists", "{name} must be present"),
    ("propertyExists", "{name} must be present"),
    ("keyNotAllowed", "{name} must not be present"),
    ("keySet", "{name} must contain exactly the keys {expected}"),
    ("objectType", "{name} must be an object"),
    // leaves
    ("alwaysValid", "{name} is always valid"),
    ("alwaysInvalid", "{name} is always invalid"),
    ("callback", "{name} must be valid"),
    ("equals", "{name} must equal {compare_to}"),
    ("in", "{name} must be in {haystack}"),
    ("nullType", "{name} must be null"),
    ("boolType", "{name} must be a boolean"),
    ("intType", "{name} must be an integer"),
    ("floatType", "{name} must be a float"),
    ("numberType", "{name} must be a number"),
    ("stringType", "{name} must be a string"),
    ("arrayType", "{name} must be an array"),
    ("notEmpty", "{name} must not be empty"),
    ("trueVal", "{name} must be true"),
    ("falseVal", "{name} must be false"),
    ("min", "{name} must be greater than or equal to {compare_to}"),
    ("max", "{name} must be less than or equal to {compare_to}"),
    ("greaterThan", "{name} must be greater than {compare_to}"),
    ("lessThan", "{name} must be less than {compare_to}"),
    ("between", "{name} must be between {min} and {max}"),
    ("positive", "{name} must be positive"),
    ("negative", "{name} must be negative"),
    ("even", "{name} must be an even number"),
    ("odd", "{name} must be an odd number"),
    ("multiple", "{name} must be a multiple of {multiple_of}"),
    ("length", "{name} must have a length between {min} and {max}"),
    ("regex", "{name} must match the pattern {pattern}"),
    ("contains", "{name} must contain {needle}"),
    ("startsWith", "{name} must start with {needle}"),
    ("endsWith", "{name} must end with {needle}"),
    ("publicDomainSuffix", "{name} must be a public domain suffix"),
];

/// Returns the built-in template for an identifier, if there is one.
#[must_use]
pub fn default_template(id: &str) -> Option<&'static str> {
    DEFAULT_TEMPLATES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, pattern)| *pattern)
}

/// Renders `pattern`, substituting `{param}` placeholders from `params`.
///
/// Unknown placeholders are rendered as `{?param}`.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use sieve_validator::foundation::{Params, template::render};
///
/// let mut params = Params::new();
/// params.push((Cow::Borrowed("name"), Cow::Borrowed("age")));
///
/// assert_eq!(render("{name} must be {what}", &params), "age must be {?what}");
/// ```
#[must_use]
pub fn render(pattern: &str, params: &[(Cow<'static, str>, Cow<'static, str>)]) -> String {
    PLACEHOLDER
        .replace_all(pattern, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            params
                .iter()
                .find(|(k, _)| k.as_ref() == key)
                .map_or_else(|| format!("{{?{key}}}"), |(_, v)| v.to_string())
        })
        .into_owned()
}

// ============================================================================
// TEMPLATE SET
// ============================================================================

/// Per-tree template overrides, keyed by rule identifier.
///
/// Attached to a [`Validator`](crate::validator::Validator) at construction time; it is
/// read-only once evaluation starts.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::TemplateSet;
///
/// let templates = TemplateSet::new().with("allOf", "custom {id} message");
/// assert_eq!(templates.resolve("allOf"), "custom {id} message");
/// assert_eq!(templates.resolve("positive"), "{name} must be positive");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    overrides: HashMap<String, String>,
}

impl TemplateSet {
    /// Creates an empty set (every identifier falls through to the defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, id: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.insert(id, pattern);
        self
    }

    /// Adds or replaces an override.
    pub fn insert(&mut self, id: impl Into<String>, pattern: impl Into<String>) {
        self.overrides.insert(id.into(), pattern.into());
    }

    /// Merges `other` into this set; entries in `other` win.
    pub fn merge(&mut self, other: TemplateSet) {
        self.overrides.extend(other.overrides);
    }

    /// Returns the override for an identifier, without consulting defaults.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.overrides.get(id).map(String::as_str)
    }

    /// Resolves an identifier: override, then default, then fallback.
    #[must_use]
    pub fn resolve(&self, id: &str) -> &str {
        self.get(id)
            .or_else(|| default_template(id))
            .unwrap_or(FALLBACK_TEMPLATE)
    }

    /// Returns the number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns true if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Parses a JSON object of `identifier -> pattern` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            overrides: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for TemplateSet {
    fn from(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }
}

// ============================================================================
// TESTS
// ============================================================================
