//! Integration tests for combinators and navigators.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use sieve_validator::prelude::*;

// ============================================================================
// LOGICAL COMBINATORS
// ============================================================================

#[rstest]
#[case(json!(4), true)] // even only
#[case(json!(-3), true)] // negative only
#[case(json!(-4), false)] // both
#[case(json!(3), false)] // neither
fn one_of_even_or_negative(#[case] input: Value, #[case] accepted: bool) {
    let rule = one_of![even(), negative()];
    assert_eq!(rule.check(&input), accepted);
}

#[test]
fn one_of_reports_both_passing_distinctly_from_none_passing() {
    let rule = one_of![even(), negative()];

    let both = rule.assert(&json!(-4)).unwrap_err();
    assert_eq!(both.id, "oneOfMultiple");
    assert_eq!(both.param("matched"), Some("2"));

    let neither = rule.assert(&json!(3)).unwrap_err();
    assert_eq!(neither.id, "oneOf");
    assert_eq!(neither.children.len(), 2);
}

#[test]
fn any_of_reports_every_child_when_none_match() {
    let rule = any_of![string_type(), null_type(), bool_type()];
    let err = rule.assert(&json!(1)).unwrap_err();

    assert_eq!(err.id, "anyOf");
    let ids: Vec<_> = err.children.iter().map(|c| c.id.as_ref()).collect();
    assert_eq!(ids, ["stringType", "nullType", "boolType"]);
}

#[test]
fn none_of_reports_children_that_passed() {
    let rule = none_of![even(), positive(), negative()];
    let err = rule.assert(&json!(4)).unwrap_err();

    assert_eq!(err.id, "noneOf");
    let ids: Vec<_> = err.children.iter().map(|c| c.id.as_ref()).collect();
    assert_eq!(ids, ["not", "not"]);
    assert_eq!(err.children[0].param("rule"), Some("even"));
    assert_eq!(err.children[1].param("rule"), Some("positive"));
}

#[test]
fn not_reports_the_wrapped_rule() {
    let err = not(even()).assert(&json!(2)).unwrap_err();
    assert_eq!(err.message, "2 must not pass the \"even\" rule");
    assert!(err.children.is_empty());
}

#[rstest]
#[case(json!("abc"), true)] // string: length checked
#[case(json!("abcdefghijk"), false)]
#[case(json!(5), true)] // number: positive checked
#[case(json!(-5), false)]
#[case(json!(null), false)] // `otherwise` requires a number
fn when_dispatches_on_condition(#[case] input: Value, #[case] accepted: bool) {
    let rule = when(string_type(), length(None, Some(10)).unwrap(), None)
        .otherwise(number_type().and(positive()));
    assert_eq!(rule.check(&input), accepted);
}

#[test]
fn when_without_else_passes_when_condition_fails() {
    let rule = when(string_type(), not_empty(), None);
    assert!(rule.check(&json!(42)));
    assert!(!rule.check(&json!("")));
}

#[rstest]
#[case(json!(""))]
#[case(json!(null))]
#[case(json!([]))]
#[case(json!({}))]
fn optional_accepts_empty_inputs(#[case] input: Value) {
    assert!(optional(always_invalid()).check(&input));
}

#[test]
fn optional_delegates_on_non_empty_input() {
    let rule = optional(int_type());
    assert!(rule.check(&json!(0)));
    assert!(!rule.check(&json!("x")));
    assert!(!optional(always_invalid()).check(&json!(false)));
}

#[test]
fn nullable_accepts_only_null() {
    let rule = nullable(string_type());
    assert!(rule.check(&json!(null)));
    assert!(rule.check(&json!("x")));
    assert!(!rule.check(&json!(1)));
    assert!(!nullable(int_type()).check(&json!("")));
}

// ============================================================================
// EACH
// ============================================================================

#[test]
fn each_accepts_empty_collections() {
    assert!(each(always_invalid()).check(&json!([])));
    assert!(each(always_invalid()).check(&json!({})));
}

#[test]
fn each_rejects_non_iterables() {
    let err = each(int_type()).assert(&json!("123")).unwrap_err();
    assert_eq!(err.id, "iterableType");
}

#[test]
fn each_tags_failures_with_index_or_key() {
    let err = each(positive()).assert(&json!([1, -2, 3, -4])).unwrap_err();
    assert_eq!(err.id, "each");
    let paths: Vec<_> = err.children.iter().map(|c| c.path.as_deref()).collect();
    assert_eq!(paths, [Some("[1]"), Some("[3]")]);

    let err = each(positive()).assert(&json!({"a": 1, "b": -1})).unwrap_err();
    assert_eq!(err.children[0].path.as_deref(), Some("b"));
}

#[test]
fn each_fail_fast_stops_at_first_failure() {
    let err = each_fail_fast(positive())
        .assert(&json!([-1, -2]))
        .unwrap_err();
    assert_eq!(err.children.len(), 1);
}

// ============================================================================
// NAVIGATORS
// ============================================================================

#[test]
fn mandatory_key_reports_missing_member_without_delegating() {
    let rule = key("age", greater_than(0));
    let err = rule.assert(&json!({"name": "x"})).unwrap_err();

    assert_eq!(err.id, "keyExists");
    assert_eq!(err.path.as_deref(), Some("age"));
    assert_eq!(err.message, "age must be present");
    assert!(err.find("greaterThan").is_none());
}

#[test]
fn optional_key_passes_when_absent_and_delegates_when_present() {
    let rule = key_optional("age", greater_than(0));
    assert!(rule.check(&json!({})));
    assert!(rule.check(&json!({"age": 3})));

    let err = rule.assert(&json!({"age": 0})).unwrap_err();
    assert_eq!(err.id, "greaterThan");
    assert_eq!(err.message, "age must be greater than 0");
}

#[test]
fn key_exists_only_checks_presence() {
    let rule = key_exists("id");
    assert!(rule.check(&json!({"id": null})));
    assert!(!rule.check(&json!({"ID": 1})));
    assert!(!rule.check(&json!("id")));
}

#[test]
fn key_indexes_arrays_property_does_not() {
    assert!(key("1", equals("b")).check(&json!(["a", "b"])));
    assert!(!property("1", equals("b")).check(&json!(["a", "b"])));

    let err = property("1", equals("b")).assert(&json!(["a", "b"])).unwrap_err();
    assert_eq!(err.id, "propertyExists");
}

#[test]
fn key_nested_walks_dotted_and_bracketed_paths() {
    let rule = key_nested("user.tags[1]", string_type().and(not_empty())).unwrap();
    assert!(rule.check(&json!({"user": {"tags": ["a", "b"]}})));

    let err = rule
        .assert(&json!({"user": {"tags": ["a", ""]}}))
        .unwrap_err();
    assert_eq!(err.children[0].path.as_deref(), Some("user.tags[1]"));

    let missing = rule.assert(&json!({"user": {}})).unwrap_err();
    assert_eq!(missing.id, "keyExists");
}

#[test]
fn key_nested_prefers_literal_keys_containing_separators() {
    let rule = key_nested("a.b", equals(1)).unwrap();
    assert!(rule.check(&json!({"a.b": 1, "a": {"b": 2}})));
    assert!(!rule.check(&json!({"a": {"b": 2}})));
}

#[rstest]
#[case("")]
#[case("a..b")]
#[case("a[1")]
#[case("a[x]")]
fn key_nested_rejects_malformed_paths(#[case] path: &str) {
    assert!(matches!(
        key_nested(path, always_valid()),
        Err(ConfigError::InvalidKeyPath { .. })
    ));
}

#[test]
fn key_set_reports_missing_and_extra_keys() {
    let rule = key_set(vec![key("id", int_type()), key_optional("name", string_type())]);
    assert!(rule.check(&json!({"id": 1})));
    assert!(rule.check(&json!({"id": 1, "name": "x"})));

    let err = rule.assert(&json!({"name": 2, "role": "admin"})).unwrap_err();
    assert_eq!(err.id, "keySet");
    assert_eq!(err.param("missing"), Some("id"));
    assert_eq!(err.param("extra"), Some("role"));

    let ids: Vec<_> = err.children.iter().map(|c| c.id.as_ref()).collect();
    assert_eq!(ids, ["keyExists", "stringType", "keyNotAllowed"]);
}

#[test]
fn key_set_rejects_non_objects() {
    let err = key_set(vec![key_exists("a")]).assert(&json!([1])).unwrap_err();
    assert_eq!(err.id, "objectType");
}

// ============================================================================
// FLOW
// ============================================================================

#[test]
fn consecutive_reports_only_the_first_failure() {
    let rule = consecutive(vec![
        string_type().boxed(),
        not_empty().boxed(),
        regex("^[a-z]+$").unwrap().boxed(),
    ]);
    assert!(rule.check(&json!("abc")));

    let err = rule.assert(&json!(7)).unwrap_err();
    assert_eq!(err.id, "stringType");
    assert!(err.children.is_empty());
}

#[test]
fn lazy_builds_the_rule_from_the_input() {
    let rule = lazy(|input: &Value| {
        if input.get("kind") == Some(&json!("number")) {
            key("value", number_type()).boxed()
        } else {
            key("value", string_type()).boxed()
        }
    });

    assert!(rule.check(&json!({"kind": "number", "value": 1})));
    assert!(rule.check(&json!({"kind": "text", "value": "x"})));
    assert!(!rule.check(&json!({"kind": "number", "value": "x"})));
}

#[test]
fn call_validates_the_transformed_input() {
    let parse = |input: &Value| input.as_str().and_then(|s| s.parse::<i64>().ok()).map(Value::from);
    let rule = call(parse, positive());

    assert!(rule.check(&json!("42")));
    assert!(!rule.check(&json!("-1")));

    let err = rule.assert(&json!("forty-two")).unwrap_err();
    assert_eq!(err.id, "call");
}
