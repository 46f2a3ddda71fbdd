//! Error types for validation failures
//!
//! [`ValidationError`] is the failure report produced when a rule rejects an
//! input. It nests: combinators and navigators attach the reports of their
//! failing children, in evaluation order, so a host can render the whole tree
//! top-down.
//!
//! [`ConfigError`] is the other half of the taxonomy: a rule tree that cannot
//! be built. It is returned from constructors and never from evaluation.
//!
//! All string fields use `Cow<'static, str>` so reports built from static
//! identifiers don't allocate for them.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::template;

/// Named parameters attached to a report.
///
/// Stored as ordered key-value pairs. Every report produced through a
/// [`Context`](crate::foundation::Context) carries `id`, `name` and `input`
/// first, followed by the rule's own parameters.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured failure report with support for nested child reports.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("allOf", "All of the required rules must pass for age")
///     .with_path("age")
///     .with_child(ValidationError::new("positive", "age must be positive"));
///
/// assert_eq!(error.total_error_count(), 2);
/// assert_eq!(error.children[0].id, "positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Identifier of the rule that rejected the input.
    ///
    /// Examples: "allOf", "keyExists", "positive"
    pub id: Cow<'static, str>,

    /// Message rendered from the rule's template.
    pub message: Cow<'static, str>,

    /// Path from the tree root to the rejected value, if the rule ran below a
    /// navigator.
    ///
    /// Examples: "age", "user.email", "tags[2]"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Cow<'static, str>>,

    /// Bounded representation of the rejected input.
    pub input: Cow<'static, str>,

    /// Parameters the message was rendered from.
    #[serde(serialize_with = "serialize_params")]
    pub params: Params,

    /// Reports of the failing children, in the order they were evaluated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new report with an identifier and an already rendered message.
    pub fn new(id: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            path: None,
            input: Cow::Borrowed(""),
            params: Params::new(),
            children: Vec::new(),
        }
    }

    /// Sets the path of the rejected value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<Cow<'static, str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the input snippet.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: impl Into<Cow<'static, str>>) -> Self {
        self.input = input.into();
        self
    }

    /// Adds a parameter to the report.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces all parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Replaces the child reports.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_children(mut self, children: Vec<ValidationError>) -> Self {
        self.children = children;
        self
    }

    /// Appends a single child report.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_child(mut self, child: ValidationError) -> Self {
        self.children.push(child);
        self
    }

    /// Re-renders the message from `pattern` using this report's own params.
    ///
    /// Children and params are kept as they are.
    #[must_use = "builder methods must be chained or built"]
    pub fn rerender(mut self, pattern: &str) -> Self {
        self.message = Cow::Owned(template::render(pattern, &self.params));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this report has child reports.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of reports in this tree (including this one).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the tree into a single list (depth-first, pre-order).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for child in &self.children {
            result.extend(child.flatten());
        }
        result
    }

    /// Finds the first report in the tree (pre-order) with the given identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ValidationError> {
        self.flatten().into_iter().find(|e| e.id == id)
    }

    /// Collects the messages of the leaf reports, keyed by path (or by
    /// identifier when the report has no path).
    ///
    /// This is the shape a form renderer usually wants: one entry per thing
    /// the user has to fix, in evaluation order.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect_messages(&mut out);
        out
    }

    fn collect_messages(&self, out: &mut Vec<(String, String)>) {
        if self.children.is_empty() {
            let key = self.path.as_deref().unwrap_or(&self.id).to_owned();
            out.push((key, self.message.to_string()));
        } else {
            for child in &self.children {
                child.collect_messages(out);
            }
        }
    }

    /// Renders the whole tree as an indented list, one report per line.
    ///
    /// ```text
    /// - All of the required rules must pass for "x"
    ///   - "x" must be an integer
    ///   - "x" must be positive
    /// ```
    #[must_use]
    pub fn full_message(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        if !out.is_empty() {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str("- ");
        out.push_str(&self.message);
        for child in &self.children {
            child.write_tree(out, depth + 1);
        }
    }

    /// Converts the report to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn serialize_params<S>(params: &Params, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}: {}", path, self.id, self.message)?;
        } else {
            write!(f, "{}: {}", self.id, self.message)?;
        }

        if !self.children.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, child) in self.children.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, child)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A rule tree that cannot be built.
///
/// Detected eagerly by constructors; evaluation never returns this.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A key path reference could not be parsed.
    #[error("invalid key path `{path}`")]
    InvalidKeyPath {
        /// The reference as given.
        path: String,
        /// What is wrong with it.
        #[source]
        source: crate::combinators::KeyPathError,
    },

    /// A lower bound is greater than the upper bound.
    #[error("invalid bounds for `{rule}`: minimum {min} is greater than maximum {max}")]
    InvalidBounds {
        /// Identifier of the rule being built.
        rule: &'static str,
        /// The lower bound as given.
        min: String,
        /// The upper bound as given.
        max: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The compiler's diagnostic.
        #[source]
        source: regex::Error,
    },

    /// Any other argument a rule cannot work with.
    #[error("invalid argument for `{rule}`: {reason}")]
    InvalidArgument {
        /// Identifier of the rule being built.
        rule: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("failed to parse validator configuration")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationError {
        ValidationError::new("allOf", "All of the required rules must pass for user")
            .with_children(vec![
                ValidationError::new("keyExists", "email must be present").with_path("email"),
                ValidationError::new("allOf", "All of the required rules must pass for age")
                    .with_path("age")
                    .with_child(
                        ValidationError::new("positive", "age must be positive").with_path("age"),
                    ),
            ])
    }

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("positive", "must be positive");
        assert_eq!(error.id, "positive");
        assert_eq!(error.message, "must be positive");
        assert!(!error.has_children());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("between", "out of range")
            .with_param("min", "1")
            .with_param("max", "5");

        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_total_count_and_flatten() {
        let error = sample();
        assert_eq!(error.total_error_count(), 4);

        let ids: Vec<_> = error.flatten().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["allOf", "keyExists", "allOf", "positive"]);
    }

    #[test]
    fn test_find() {
        let error = sample();
        assert_eq!(
            error.find("positive").map(|e| e.message.as_ref()),
            Some("age must be positive")
        );
        assert!(error.find("negative").is_none());
    }

    #[test]
    fn test_messages_are_leaf_level() {
        let messages = sample().messages();
        assert_eq!(
            messages,
            vec![
                ("email".to_owned(), "email must be present".to_owned()),
                ("age".to_owned(), "age must be positive".to_owned()),
            ]
        );
    }

    #[test]
    fn test_full_message_indents_by_depth() {
        let rendered = sample().full_message();
        assert_eq!(
            rendered,
            "- All of the required rules must pass for user\n  \
             - email must be present\n  \
             - All of the required rules must pass for age\n    \
             - age must be positive"
        );
    }

    #[test]
    fn test_rerender_keeps_children() {
        let error = ValidationError::new("allOf", "original")
            .with_param("id", "allOf")
            .with_child(ValidationError::new("odd", "must be odd"))
            .rerender("custom {id} message");

        assert_eq!(error.message, "custom allOf message");
        assert_eq!(error.children.len(), 1);
    }

    #[test]
    fn test_serialize_params_as_map() {
        let error = ValidationError::new("min", "too small")
            .with_input("3")
            .with_param("compare_to", "5");
        let json = error.to_json_value();

        assert_eq!(json["id"], "min");
        assert_eq!(json["params"]["compare_to"], "5");
        assert!(json.get("children").is_none());
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("alwaysInvalid", "always invalid");
        assert!(matches!(error.id, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidBounds {
            rule: "between",
            min: "10".into(),
            max: "1".into(),
        };
        assert_eq!(
            error.to_string(),
            "invalid bounds for `between`: minimum 10 is greater than maximum 1"
        );
    }
}
