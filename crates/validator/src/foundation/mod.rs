//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Reports**: [`ValidationError`], [`Validity`]
//! - **Evaluation state**: [`Context`], [`ReportConfig`]
//! - **Messages**: [`TemplateSet`] and the renderer in [`template`]
//! - **Configuration errors**: [`ConfigError`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Leaves, combinators and navigators all implement [`Rule`], so any of them
//! can sit anywhere in a tree:
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let rule = key("age", int_type().and(positive()));
//! assert!(rule.check(&json!({"age": 30})));
//! ```
//!
//! ## 2. Immutable trees
//!
//! A tree is built once and evaluated many times. Evaluation state lives in a
//! [`Context`] created per call, so a tree behind an `Arc` can be shared
//! between threads.
//!
//! ## 3. Structured reports
//!
//! A rejection carries the report of every failing child, in evaluation
//! order, with messages rendered from templates that can be overridden per
//! tree without touching rule code.

pub mod context;
pub mod error;
pub mod template;
pub mod traits;
pub mod validity;
pub mod value;

pub use context::{Context, DEFAULT_INPUT_SNIPPET_LEN, ReportConfig};
pub use error::{ConfigError, Params, ValidationError};
pub use template::TemplateSet;
pub use traits::{BoxedRule, Rule, RuleExt};
pub use validity::Validity;

/// Builds a [`Params`] list from `name => value` pairs.
///
/// Values are rendered with `ToString`.
///
/// ```
/// use sieve_validator::params;
///
/// let p = params! { "min" => 1, "max" => 5 };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p[1].1, "5");
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::foundation::Params::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut params = $crate::foundation::Params::new();
        $(
            params.push((
                ::std::borrow::Cow::Borrowed($key),
                ::std::borrow::Cow::Owned(::std::string::ToString::to_string(&$value)),
            ));
        )+
        params
    }};
}
