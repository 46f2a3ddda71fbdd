//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the rule traits, report types, every factory function and the macros.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let tags = array_type().and(each(string_type().and(not_empty())));
//! let color = in_set(["red", "green", "blue"]);
//! let size = one_of![int_type().and(positive()), equals("auto")];
//!
//! assert!(tags.check(&json!(["a", "b"])));
//! assert!(color.check(&json!("green")));
//! assert!(size.check(&json!("auto")));
//! ```

// ============================================================================
// FOUNDATION: Core traits, reports, evaluation state
// ============================================================================

pub use crate::foundation::{
    BoxedRule, ConfigError, Context, Params, ReportConfig, Rule, RuleExt, TemplateSet,
    ValidationError, Validity,
};

// ============================================================================
// CHAIN BUILDER
// ============================================================================

pub use crate::validator::{Validator, ValidatorConfig};

// ============================================================================
// VALIDATORS: All built-in leaf rules
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and navigators
// ============================================================================

pub use crate::combinators::{
    AllOf, AnyOf, Call, Consecutive, Each, Key, KeyNested, KeySet, Lazy, NoneOf, Not, Nullable,
    OneOf, Optional, Property, Templated, When, all_of, any_of, call, consecutive, each,
    each_fail_fast, key, key_exists, key_nested, key_nested_optional, key_optional, key_set, lazy,
    none_of, not, nullable, one_of, optional, property, property_optional, when, with_template,
};

// ============================================================================
// SEARCHERS: Set-membership rules
// ============================================================================

pub use crate::searcher::{
    DataSource, InSet, PublicDomainSuffix, Search, Searcher, in_set, public_domain_suffix,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of, none_of, one_of, params, rule};
