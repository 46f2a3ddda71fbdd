//! Helpers over the dynamic value model.
//!
//! Rules validate `serde_json::Value`. Hosts with typed data convert it first
//! (`serde_json::to_value`); a value of the wrong variant is a rejection,
//! never a panic.

use std::cmp::Ordering;

use serde_json::Value;

/// The shared emptiness predicate.
///
/// `null`, `""`, `[]` and `{}` are empty. `0`, `false` and whitespace-only
/// strings are not.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Human-readable name of the value's variant.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Compact JSON rendering of `value`, cut to at most `max_chars` characters
/// (plus a trailing `...` when cut).
#[must_use]
pub fn snippet(value: &Value, max_chars: usize) -> String {
    let rendered = value.to_string();
    match rendered.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &rendered[..cut]),
        None => rendered,
    }
}

/// Orders two values of the same comparable variant.
///
/// Numbers compare numerically (exactly when both are integers), strings
/// lexicographically. Anything else is incomparable.
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Loose equality: numbers compare by value (`1 == 1.0`), everything else
/// structurally.
#[must_use]
pub fn equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(_), Value::Number(_)) => compare(left, right) == Some(Ordering::Equal),
        _ => left == right,
    }
}

/// The value as an integer, if it is an integral number.
///
/// Floats with no fractional part count (`4.0` is `4`).
#[must_use]
pub fn as_integer(value: &Value) -> Option<i128> {
    let number = value.as_number()?;
    if let Some(n) = number.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(i128::from(n));
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e38)
        .map(|f| f as i128)
}

/// Number of characters of a string, or of members of an array or object.
#[must_use]
pub fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(members) => Some(members.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));

        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
        assert!(!is_empty(&json!([null])));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!(1)), "integer");
        assert_eq!(type_name(&json!(1.5)), "float");
        assert_eq!(type_name(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        assert_eq!(snippet(&json!("abc"), 10), "\"abc\"");
        assert_eq!(snippet(&json!("héllo wörld"), 4), "\"hél...");
        assert_eq!(snippet(&json!([1, 2, 3]), 64), "[1,2,3]");
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&json!(1), &json!(2)), Some(Ordering::Less));
        assert_eq!(compare(&json!(2.5), &json!(2)), Some(Ordering::Greater));
        assert_eq!(compare(&json!("b"), &json!("a")), Some(Ordering::Greater));
        assert_eq!(compare(&json!("1"), &json!(1)), None);
        assert_eq!(compare(&json!(null), &json!(null)), None);
    }

    #[test]
    fn test_equals_is_numeric_for_numbers() {
        assert!(equals(&json!(1), &json!(1.0)));
        assert!(equals(&json!({"a": [1]}), &json!({"a": [1]})));
        assert!(!equals(&json!("1"), &json!(1)));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(as_integer(&json!(-4)), Some(-4));
        assert_eq!(as_integer(&json!(u64::MAX)), Some(i128::from(u64::MAX)));
        assert_eq!(as_integer(&json!(4.0)), Some(4));
        assert_eq!(as_integer(&json!(4.5)), None);
        assert_eq!(as_integer(&json!("4")), None);
    }

    #[test]
    fn test_length() {
        assert_eq!(length(&json!("héllo")), Some(5));
        assert_eq!(length(&json!([1, 2])), Some(2));
        assert_eq!(length(&json!({"a": 1})), Some(1));
        assert_eq!(length(&json!(12)), None);
    }
}
