//! # sieve-validator
//!
//! Composable rule trees for validating dynamic values.
//!
//! Input is a [`Value`] (a `serde_json::Value`); typed data is validated by
//! converting it with `serde_json::to_value` first. A tree is built once from
//! leaves, combinators and navigators, then evaluated any number of times,
//! from any number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let user = all_of![
//!     key("name", string_type().and(length(Some(1), Some(64)).unwrap())),
//!     key_optional("age", int_type().and(between(0, 150).unwrap())),
//!     key_optional("tags", each(string_type())),
//! ];
//!
//! assert!(user.check(&json!({"name": "Ada", "age": 36})));
//!
//! let error = user.assert(&json!({"name": "", "tags": ["a", 2]})).unwrap_err();
//! assert_eq!(
//!     error.messages(),
//!     [
//!         ("name".to_owned(), "name must have a length between 1 and 64".to_owned()),
//!         ("tags[1]".to_owned(), "tags[1] must be a string".to_owned()),
//!     ]
//! );
//! ```
//!
//! ## Three Ways to Ask
//!
//! Every rule answers through the [`Rule`](foundation::Rule) trait:
//!
//! - `check` - a plain `bool`, no report is built
//! - `assert` - `Result<(), ValidationError>` with the full report tree
//! - `validate` - the same as a [`Validity`](foundation::Validity) value
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for leaf rules, or implement
//! [`Rule`](foundation::Rule) manually. Messages come from templates keyed by
//! rule identifier; see [`TemplateSet`](foundation::TemplateSet) and
//! [`Validator`](validator::Validator) for overriding them.
//!
//! ## Modules
//!
//! - [`foundation`] - the rule contract, reports, context and templates
//! - [`combinators`] - logical combinators and structural navigators
//! - [`validators`] - built-in leaf rules
//! - [`searcher`] - set-membership rules backed by data sources
//! - [`validator`] - the chain builder and its configuration

// ValidationError is the fundamental report type for all rules; boxing it
// would add indirection to every evaluation for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod searcher;
pub mod validator;
pub mod validators;

/// The dynamic value model rules evaluate.
pub use serde_json::Value;
