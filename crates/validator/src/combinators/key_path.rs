//! Dotted/bracketed member references
//!
//! A [`KeyPath`] is parsed once, when the navigator is built, and resolved
//! against each input.
//!
//! # Syntax
//!
//! - `user.name` - object member access
//! - `items[0]` - array element access
//! - Chained: `user.addresses[0].city`
//!
//! # Ambiguous separators
//!
//! There is no escaping. When an object has a member whose own name contains
//! a `.`, resolution tries the longest run of remaining dotted segments as a
//! single literal key first, then shorter runs. For `{"a.b": {"c": 1}}` the
//! path `a.b.c` resolves to `1`. Resolution does not backtrack: once a
//! literal key has been picked, a miss further down is a miss, even if a
//! shorter split would have found a value.

use std::fmt;

use serde_json::Value;

use crate::foundation::ConfigError;

/// Maximum number of path segments allowed.
const MAX_PATH_SEGMENTS: usize = 100;

/// Why a key path could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum KeyPathError {
    /// The path is empty.
    #[error("path is empty")]
    Empty,

    /// A separator is not followed by a member name.
    #[error("empty segment at byte {position}")]
    EmptySegment {
        /// Byte offset of the offending separator.
        position: usize,
    },

    /// A `[` has no matching `]`.
    #[error("unclosed `[` at byte {position}")]
    UnclosedBracket {
        /// Byte offset of the `[`.
        position: usize,
    },

    /// The text between brackets is not an index.
    #[error("`{index}` is not an array index")]
    InvalidIndex {
        /// The bracketed text.
        index: String,
    },

    /// The path has more segments than allowed.
    #[error("path has more than {max} segments")]
    TooManySegments {
        /// The limit.
        max: usize,
    },
}

/// One step of a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member access: `.key`
    Key(String),
    /// Array element access: `[index]`
    Index(usize),
}

/// A parsed member reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// Parses a dotted/bracketed reference.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyPath`] if the reference is empty,
    /// has an empty segment, an unclosed bracket, a non-numeric index, or
    /// more than 100 segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::combinators::{KeyPath, PathSegment};
    ///
    /// let path = KeyPath::parse("items[0].name").unwrap();
    /// assert_eq!(
    ///     path.segments(),
    ///     [
    ///         PathSegment::Key("items".into()),
    ///         PathSegment::Index(0),
    ///         PathSegment::Key("name".into()),
    ///     ]
    /// );
    /// assert!(KeyPath::parse("a..b").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, ConfigError> {
        parse_segments(path)
            .map(|segments| Self {
                raw: path.to_owned(),
                segments,
            })
            .map_err(|source| ConfigError::InvalidKeyPath {
                path: path.to_owned(),
                source,
            })
    }

    /// The reference as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Finds the member this path refers to.
    ///
    /// Returns `None` when any step is missing or the input has the wrong
    /// shape for a step.
    pub fn resolve<'v>(&self, input: &'v Value) -> Option<&'v Value> {
        resolve_from(input, &self.segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn resolve_from<'v>(current: &'v Value, segments: &[PathSegment]) -> Option<&'v Value> {
    let Some(first) = segments.first() else {
        return Some(current);
    };

    match (current, first) {
        (Value::Array(items), PathSegment::Index(index)) => {
            resolve_from(items.get(*index)?, &segments[1..])
        }
        (Value::Object(members), PathSegment::Key(_)) => {
            // Longest run of consecutive keys that names an existing member.
            let run = segments
                .iter()
                .take_while(|s| matches!(s, PathSegment::Key(_)))
                .count();

            (1..=run)
                .rev()
                .find_map(|len| {
                    let literal = join_keys(&segments[..len]);
                    members.get(&literal).map(|member| (member, len))
                })
                .and_then(|(member, len)| resolve_from(member, &segments[len..]))
        }
        _ => None,
    }
}

fn join_keys(segments: &[PathSegment]) -> String {
    let mut joined = String::new();
    for segment in segments {
        if let PathSegment::Key(key) = segment {
            if !joined.is_empty() {
                joined.push('.');
            }
            joined.push_str(key);
        }
    }
    joined
}

fn parse_segments(path: &str) -> Result<Vec<PathSegment>, KeyPathError> {
    if path.is_empty() {
        return Err(KeyPathError::Empty);
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    // Whether a key is required before the next separator.
    let mut expect_key = true;
    let mut chars = path.char_indices().peekable();

    let push = |segments: &mut Vec<PathSegment>, segment| {
        segments.push(segment);
        if segments.len() > MAX_PATH_SEGMENTS {
            Err(KeyPathError::TooManySegments {
                max: MAX_PATH_SEGMENTS,
            })
        } else {
            Ok(())
        }
    };

    while let Some((position, ch)) = chars.next() {
        match ch {
            '.' => {
                if current.is_empty() && (expect_key || segments.is_empty()) {
                    return Err(KeyPathError::EmptySegment { position });
                }
                if !current.is_empty() {
                    push(&mut segments, PathSegment::Key(std::mem::take(&mut current)))?;
                }
                expect_key = true;
            }
            '[' => {
                if !current.is_empty() {
                    push(&mut segments, PathSegment::Key(std::mem::take(&mut current)))?;
                } else if expect_key && !segments.is_empty() {
                    return Err(KeyPathError::EmptySegment { position });
                }

                let mut index = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    index.push(c);
                }
                if !closed {
                    return Err(KeyPathError::UnclosedBracket { position });
                }

                let parsed = index
                    .parse::<usize>()
                    .map_err(|_| KeyPathError::InvalidIndex { index })?;
                push(&mut segments, PathSegment::Index(parsed))?;
                expect_key = false;
            }
            _ => {
                current.push(ch);
                expect_key = false;
            }
        }
    }

    if !current.is_empty() {
        push(&mut segments, PathSegment::Key(current))?;
    } else if expect_key {
        return Err(KeyPathError::EmptySegment {
            position: path.len(),
        });
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(k: &str) -> PathSegment {
        PathSegment::Key(k.to_owned())
    }

    #[test]
    fn test_parse_simple() {
        let path = KeyPath::parse("user").unwrap();
        assert_eq!(path.segments(), [key("user")]);
    }

    #[test]
    fn test_parse_nested_and_indexed() {
        let path = KeyPath::parse("data[0].value").unwrap();
        assert_eq!(
            path.segments(),
            [key("data"), PathSegment::Index(0), key("value")]
        );

        let path = KeyPath::parse("[1][2]").unwrap();
        assert_eq!(
            path.segments(),
            [PathSegment::Index(1), PathSegment::Index(2)]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_segments(""), Err(KeyPathError::Empty)));
        assert!(matches!(
            parse_segments("a..b"),
            Err(KeyPathError::EmptySegment { position: 2 })
        ));
        assert!(matches!(
            parse_segments(".a"),
            Err(KeyPathError::EmptySegment { position: 0 })
        ));
        assert!(matches!(parse_segments("a."), Err(KeyPathError::EmptySegment { .. })));
        assert!(matches!(
            parse_segments("a[0"),
            Err(KeyPathError::UnclosedBracket { position: 1 })
        ));
        assert!(matches!(
            parse_segments("a[x]"),
            Err(KeyPathError::InvalidIndex { .. })
        ));

        let long = vec!["k"; MAX_PATH_SEGMENTS + 1].join(".");
        assert!(matches!(
            parse_segments(&long),
            Err(KeyPathError::TooManySegments { .. })
        ));
    }

    #[test]
    fn test_config_error_keeps_path() {
        let err = KeyPath::parse("a..b").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidKeyPath { ref path, .. } if path == "a..b"
        ));
    }

    #[test]
    fn test_resolve() {
        let input = json!({"user": {"tags": ["a", "b"]}});
        let path = KeyPath::parse("user.tags[1]").unwrap();
        assert_eq!(path.resolve(&input), Some(&json!("b")));

        let missing = KeyPath::parse("user.tags[5]").unwrap();
        assert_eq!(missing.resolve(&input), None);

        let wrong_shape = KeyPath::parse("user[0]").unwrap();
        assert_eq!(wrong_shape.resolve(&input), None);
    }

    #[test]
    fn test_longest_literal_key_wins() {
        let input = json!({
            "a.b": {"c": "literal"},
            "a": {"b": {"c": "nested"}},
        });
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(path.resolve(&input), Some(&json!("literal")));

        let whole = json!({"a.b.c": 1, "a": {"b": {"c": 2}}});
        assert_eq!(path.resolve(&whole), Some(&json!(1)));
    }

    #[test]
    fn test_no_backtracking() {
        let input = json!({
            "a.b": {"x": 1},
            "a": {"b": {"c": 2}},
        });
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(path.resolve(&input), None);
    }
}
