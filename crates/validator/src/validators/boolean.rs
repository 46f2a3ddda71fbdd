//! Boolean validators
//!
//! `trueVal` and `falseVal` accept the usual textual spellings as well as
//! booleans: `"true"`, `"on"`, `"yes"`, `"1"` and `1` for true, and their
//! counterparts for false. Strings are matched case-insensitively.

use serde_json::Value;

const TRUTHY: &[&str] = &["1", "true", "on", "yes"];
const FALSY: &[&str] = &["0", "false", "off", "no"];

fn matches_spelling(input: &Value, flag: bool, spellings: &[&str], number: i64) -> bool {
    match input {
        Value::Bool(b) => *b == flag,
        Value::Number(n) => n.as_i64() == Some(number),
        Value::String(s) => spellings.iter().any(|w| s.eq_ignore_ascii_case(w)),
        _ => false,
    }
}

crate::rule! {
    /// Validates that the input means `true`.
    pub TrueVal = "trueVal";
    check(input) { matches_spelling(input, true, TRUTHY, 1) }
    fn true_val();
}

crate::rule! {
    /// Validates that the input means `false`.
    pub FalseVal = "falseVal";
    check(input) { matches_spelling(input, false, FALSY, 0) }
    fn false_val();
}
