//! String pattern and containment validators
//!
//! `contains`, `startsWith` and `endsWith` work on strings (substring
//! matching, the needle must be a string) and on arrays (element matching
//! with numeric-loose equality).

use serde_json::Value;

use crate::foundation::{ConfigError, value};
use crate::params;

fn needle_in(input: &Value, needle: &Value, pick: Position) -> bool {
    match (input, needle) {
        (Value::String(haystack), Value::String(needle)) => match pick {
            Position::Anywhere => haystack.contains(needle.as_str()),
            Position::Start => haystack.starts_with(needle.as_str()),
            Position::End => haystack.ends_with(needle.as_str()),
        },
        (Value::Array(items), _) => match pick {
            Position::Anywhere => items.iter().any(|item| value::equals(item, needle)),
            Position::Start => items.first().is_some_and(|item| value::equals(item, needle)),
            Position::End => items.last().is_some_and(|item| value::equals(item, needle)),
        },
        _ => false,
    }
}

#[derive(Clone, Copy)]
enum Position {
    Anywhere,
    Start,
    End,
}

crate::rule! {
    /// Validates that a string or array contains a value.
    pub Contains { needle: Value } = "contains";
    check(self, input) { needle_in(input, &self.needle, Position::Anywhere) }
    params(self) { params! { "needle" => self.needle } }
    new(needle: impl Into<Value>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<Value>);
}

crate::rule! {
    /// Validates that a string or array starts with a value.
    pub StartsWith { needle: Value } = "startsWith";
    check(self, input) { needle_in(input, &self.needle, Position::Start) }
    params(self) { params! { "needle" => self.needle } }
    new(needle: impl Into<Value>) { Self { needle: needle.into() } }
    fn starts_with(needle: impl Into<Value>);
}

crate::rule! {
    /// Validates that a string or array ends with a value.
    pub EndsWith { needle: Value } = "endsWith";
    check(self, input) { needle_in(input, &self.needle, Position::End) }
    params(self) { params! { "needle" => self.needle } }
    new(needle: impl Into<Value>) { Self { needle: needle.into() } }
    fn ends_with(needle: impl Into<Value>);
}

crate::rule! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is unanchored; use `^` and `$` to match the whole string.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::prelude::*;
    ///
    /// let rule = regex(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    /// assert!(rule.check(&json!("2024-01-15")));
    /// assert!(!rule.check(&json!("15/01/2024")));
    /// assert!(regex("(").is_err());
    /// ```
    pub Regex { pattern: ::regex::Regex } = "regex";
    check(self, input) { input.as_str().is_some_and(|s| self.pattern.is_match(s)) }
    params(self) { params! { "pattern" => self.pattern.as_str() } }
    new(pattern: &str) -> ConfigError {
        ::regex::Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
    fn regex(pattern: &str) -> ConfigError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use serde_json::json;

    #[test]
    fn test_string_containment() {
        assert!(contains("ell").check(&json!("hello")));
        assert!(starts_with("he").check(&json!("hello")));
        assert!(ends_with("lo").check(&json!("hello")));
        assert!(!ends_with("he").check(&json!("hello")));
        assert!(!contains(1).check(&json!("1")));
    }

    #[test]
    fn test_array_containment() {
        let input = json!([1, "two", 3.0]);
        assert!(contains(3).check(&input));
        assert!(starts_with(1).check(&input));
        assert!(ends_with(3).check(&input));
        assert!(!starts_with("two").check(&input));
        assert!(!contains("x").check(&json!([])));
    }

    #[test]
    fn test_needle_in_message() {
        let err = contains("@").assert(&json!("ab")).unwrap_err();
        assert_eq!(err.message, "\"ab\" must contain \"@\"");
    }

    #[test]
    fn test_regex() {
        let rule = regex("^[a-z]+$").unwrap();
        assert!(rule.check(&json!("abc")));
        assert!(!rule.check(&json!("ab1")));
        assert!(!rule.check(&json!(1)));

        let err = rule.assert(&json!("A")).unwrap_err();
        assert_eq!(err.param("pattern"), Some("^[a-z]+$"));
    }

    #[test]
    fn test_invalid_regex_is_config_error() {
        let err = regex("[").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "["));
    }
}
