//! Type validators
//!
//! One rule per variant of the value model. Numbers are split the way
//! `serde_json` stores them: `intType` accepts numbers held as integers,
//! `floatType` numbers held as floats, `numberType` either.

use serde_json::Value;

crate::rule! {
    /// Validates that the input is `null`.
    pub NullType = "nullType";
    check(input) { input.is_null() }
    fn null_type();
}

crate::rule! {
    /// Validates that the input is a boolean.
    pub BoolType = "boolType";
    check(input) { input.is_boolean() }
    fn bool_type();
}

crate::rule! {
    /// Validates that the input is an integer.
    pub IntType = "intType";
    check(input) { input.is_i64() || input.is_u64() }
    fn int_type();
}

crate::rule! {
    /// Validates that the input is a float.
    pub FloatType = "floatType";
    check(input) { input.is_f64() }
    fn float_type();
}

crate::rule! {
    /// Validates that the input is a number of any kind.
    pub NumberType = "numberType";
    check(input) { input.is_number() }
    fn number_type();
}

crate::rule! {
    /// Validates that the input is a string.
    pub StringType = "stringType";
    check(input) { input.is_string() }
    fn string_type();
}

crate::rule! {
    /// Validates that the input is an array.
    pub ArrayType = "arrayType";
    check(input) { matches!(input, Value::Array(_)) }
    fn array_type();
}

crate::rule! {
    /// Validates that the input is an object.
    pub ObjectType = "objectType";
    check(input) { matches!(input, Value::Object(_)) }
    fn object_type();
}
