//! Rule combinators and navigators
//!
//! This module provides the rules that build trees out of other rules.
//! Every one of them implements [`Rule`](crate::foundation::Rule), so trees
//! nest to any depth.
//!
//! # Overview
//!
//! - **Logical**: [`AllOf`], [`AnyOf`], [`OneOf`], [`NoneOf`], [`Not`]
//! - **Conditional**: [`When`]
//! - **Empty handling**: [`Optional`], [`Nullable`]
//! - **Collections**: [`Each`]
//! - **Navigation**: [`Key`], [`Property`], [`KeyNested`], [`KeySet`]
//! - **Flow**: [`Consecutive`], [`Lazy`], [`Call`]
//! - **Messages**: [`Templated`]
//!
//! # Children with no rules
//!
//! | Combinator    | Zero children |
//! |---------------|---------------|
//! | `AllOf`       | passes        |
//! | `NoneOf`      | passes        |
//! | `Consecutive` | passes        |
//! | `AnyOf`       | fails         |
//! | `OneOf`       | fails         |
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let rule = all_of![
//!     key("name", string_type().and(not_empty())),
//!     key_optional("age", int_type().and(positive())),
//!     key_optional("tags", each(string_type())),
//! ];
//!
//! assert!(rule.check(&json!({"name": "Ada", "tags": ["x"]})));
//!
//! let error = rule.assert(&json!({"name": "", "tags": [1]})).unwrap_err();
//! let paths: Vec<_> = error.messages().into_iter().map(|(path, _)| path).collect();
//! assert_eq!(paths, ["name", "tags[0]"]);
//! ```

pub mod all_of;
pub mod any_of;
pub mod call;
pub mod consecutive;
pub mod each;
pub mod key;
pub mod key_path;
pub mod key_set;
pub mod lazy;
pub mod none_of;
pub mod not;
pub mod nullable;
pub mod one_of;
pub mod optional;
pub mod templated;
pub mod when;

pub use all_of::{AllOf, all_of};
pub use any_of::{AnyOf, any_of};
pub use call::{Call, call};
pub use consecutive::{Consecutive, consecutive};
pub use each::{Each, each, each_fail_fast};
pub use key::{
    Key, KeyNested, Property, key, key_exists, key_nested, key_nested_optional, key_optional,
    property, property_optional,
};
pub use key_path::{KeyPath, KeyPathError, PathSegment};
pub use key_set::{KeySet, key_set};
pub use lazy::{Lazy, lazy};
pub use none_of::{NoneOf, none_of};
pub use not::{Not, not};
pub use nullable::{Nullable, nullable};
pub use one_of::{OneOf, one_of};
pub use optional::{Optional, optional};
pub use templated::{Templated, with_template};
pub use when::{When, when};

// ============================================================================
// COMBINATOR LAWS
// ============================================================================
