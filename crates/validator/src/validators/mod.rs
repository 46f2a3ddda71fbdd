//! Built-in leaf rules
//!
//! Leaves test a single value and never look at children. Each one is a
//! small struct implementing [`Rule`](crate::foundation::Rule) plus a free
//! factory function with the same name in snake case.
//!
//! # Categories
//!
//! - **Constants and equality**: `alwaysValid`, `alwaysInvalid`, `equals`, `callback`
//! - **Types**: `nullType`, `boolType`, `intType`, `floatType`, `numberType`,
//!   `stringType`, `arrayType`, `objectType`
//! - **Booleans**: `trueVal`, `falseVal`
//! - **Ranges**: `min`, `max`, `greaterThan`, `lessThan`, `between`
//! - **Numbers**: `positive`, `negative`, `even`, `odd`, `multiple`
//! - **Length**: `notEmpty`, `length`
//! - **Patterns**: `regex`, `contains`, `startsWith`, `endsWith`
//!
//! Membership leaves (`in`, `publicDomainSuffix`) live in
//! [`searcher`](crate::searcher).
//!
//! Factories whose arguments can be inconsistent (`between`, `length`,
//! `multiple`, `regex`) return `Result<_, ConfigError>`.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let score = number_type().and(between(0, 100).unwrap());
//! assert!(score.check(&json!(42.5)));
//! assert!(!score.check(&json!(101)));
//!
//! let code = string_type().and(regex(r"^[A-Z]{3}$").unwrap());
//! assert!(code.check(&json!("EUR")));
//! ```

pub mod basic;
pub mod boolean;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod range;
pub mod types;

pub use basic::{
    AlwaysInvalid, AlwaysValid, Callback, Equals, always_invalid, always_valid, callback, equals,
};
pub use boolean::{FalseVal, TrueVal, false_val, true_val};
pub use length::{Length, NotEmpty, length, not_empty};
pub use numeric::{Even, Multiple, Negative, Odd, Positive, even, multiple, negative, odd, positive};
pub use pattern::{Contains, EndsWith, Regex, StartsWith, contains, ends_with, regex, starts_with};
pub use range::{
    Between, GreaterThan, LessThan, Max, Min, between, greater_than, less_than, max, min,
};
pub use types::{
    ArrayType, BoolType, FloatType, IntType, NullType, NumberType, ObjectType, StringType,
    array_type, bool_type, float_type, int_type, null_type, number_type, object_type, string_type,
};
