//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a complete leaf rule (struct + `Rule` impl + factory fn)
//! - [`all_of!`], [`any_of!`], [`one_of!`], [`none_of!`] — Build a logical
//!   combinator from a list of rules of any types
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::rule;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Lowercase = "lowercase";
//!     check(input) { input.as_str().is_some_and(|s| s == s.to_lowercase()) }
//!     fn lowercase();
//! }
//!
//! // Struct with fields
//! rule! {
//!     pub MaxItems { max: usize } = "maxItems";
//!     check(self, input) { input.as_array().is_some_and(|a| a.len() <= self.max) }
//!     params(self) { sieve_validator::params! { "max" => self.max } }
//!     fn max_items(max: usize);
//! }
//!
//! use sieve_validator::foundation::Rule;
//! assert!(lowercase().check(&json!("abc")));
//! assert_eq!(max_items(1).assert(&json!([1, 2])).unwrap_err().param("max"), Some("1"));
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete leaf rule: struct definition, [`Rule`] implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. The literal after `=` is the
/// rule's identifier, used for template lookup.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub NotEmpty = "notEmpty";
///     check(input) { !value::is_empty(input) }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub Multiple { multiple_of: i64 } = "multiple";
///     check(self, input) { ... }
///     params(self) { params! { "multiple_of" => self.multiple_of } }
///     fn multiple(multiple_of: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub Min { compare_to: Value } = "min";
///     check(self, input) { ... }
///     params(self) { params! { "compare_to" => self.compare_to } }
///     new(compare_to: impl Into<Value>) { Self { compare_to: compare_to.into() } }
///     fn min(compare_to: impl Into<Value>);
/// }
/// ```
///
/// **Fallible constructor** (returns `Result<Self, $ety>`):
/// ```rust,ignore
/// rule! {
///     pub Regex { pattern: regex::Regex } = "regex";
///     check(self, input) { ... }
///     params(self) { params! { "pattern" => self.pattern } }
///     new(pattern: &str) -> ConfigError { ... }
///     fn regex(pattern: &str) -> ConfigError;
/// }
/// ```
///
/// [`Rule`]: crate::foundation::Rule
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit rule (no fields) + factory fn ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $id:literal;
        check($inp:ident) $check:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn id(&self) -> &str {
                $id
            }

            fn check(&self, $inp: &$crate::Value) -> bool $check
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Variant 2: Struct with fields + fallible new + fallible factory ──
    //
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $id:literal;
        check($self_:ident, $inp:ident) $check:block
        params($pself:ident) $params:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::rule! {
            @struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } = $id;
            check($self_, $inp) $check
            params($pself) $params
        }

        impl $name {
            /// Creates the rule, validating its configuration.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3: Struct with fields + custom new + factory fn ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $id:literal;
        check($self_:ident, $inp:ident) $check:block
        params($pself:ident) $params:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            @struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } = $id;
            check($self_, $inp) $check
            params($pself) $params
        }

        impl $name {
            /// Creates the rule.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4: Struct with fields + auto new + factory fn ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $id:literal;
        check($self_:ident, $inp:ident) $check:block
        params($pself:ident) $params:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            @struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } = $id;
            check($self_, $inp) $check
            params($pself) $params
        }

        impl $name {
            /// Creates the rule.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Internal: struct definition + Rule impl ──────────────────────────
    (
        @struct
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ } = $id:literal;
        check($self_:ident, $inp:ident) $check:block
        params($pself:ident) $params:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::foundation::Rule for $name {
            fn id(&self) -> &str {
                $id
            }

            fn check(&$self_, $inp: &$crate::Value) -> bool $check

            fn params(&$pself) -> $crate::foundation::Params $params
        }
    };
}

// ============================================================================
// LIST MACROS
// ============================================================================

/// Builds an [`AllOf`](crate::combinators::AllOf) from rules of any types.
///
/// ```
/// use sieve_validator::prelude::*;
///
/// let rule = all_of![int_type(), positive(), even()];
/// assert_eq!(rule.rules().len(), 3);
/// ```
#[macro_export]
macro_rules! all_of {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::AllOf::new(::std::vec![
            $(::std::boxed::Box::new($rule) as $crate::foundation::BoxedRule),*
        ])
    };
}

/// Builds an [`AnyOf`](crate::combinators::AnyOf) from rules of any types.
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = any_of![string_type(), int_type()];
/// assert!(rule.check(&json!(1)));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::AnyOf::new(::std::vec![
            $(::std::boxed::Box::new($rule) as $crate::foundation::BoxedRule),*
        ])
    };
}

/// Builds a [`OneOf`](crate::combinators::OneOf) from rules of any types.
#[macro_export]
macro_rules! one_of {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::OneOf::new(::std::vec![
            $(::std::boxed::Box::new($rule) as $crate::foundation::BoxedRule),*
        ])
    };
}

/// Builds a [`NoneOf`](crate::combinators::NoneOf) from rules of any types.
#[macro_export]
macro_rules! none_of {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::NoneOf::new(::std::vec![
            $(::std::boxed::Box::new($rule) as $crate::foundation::BoxedRule),*
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Rule;
    use crate::params;
    use crate::validators::{even, negative, positive};
    use serde_json::json;

    // Test 1: Unit rule (no fields)
    rule! {
        /// A test unit rule.
        TestNonBlank = "testNonBlank";
        check(input) { input.as_str().is_some_and(|s| !s.trim().is_empty()) }
        fn test_non_blank();
    }

    #[test]
    fn test_unit_rule() {
        assert!(TestNonBlank.check(&json!("x")));
        assert!(!test_non_blank().check(&json!("  ")));
        assert_eq!(TestNonBlank.id(), "testNonBlank");
    }

    // Test 2: Struct with fields
    rule! {
        TestMinLen { min: usize } = "testMinLen";
        check(self, input) { input.as_str().is_some_and(|s| s.len() >= self.min) }
        params(self) { params! { "min" => self.min } }
        fn test_min_len(min: usize);
    }

    #[test]
    fn test_struct_rule() {
        let rule = test_min_len(3);
        assert_eq!(rule.min, 3);
        assert!(rule.check(&json!("abc")));

        let err = rule.assert(&json!("ab")).unwrap_err();
        assert_eq!(err.id, "testMinLen");
        assert_eq!(err.param("min"), Some("3"));
        assert_eq!(err.message, "\"ab\" is not valid for rule \"testMinLen\"");
    }

    // Test 3: Custom new
    rule! {
        TestRange { lo: i64, hi: i64 } = "testRange";
        check(self, input) { input.as_i64().is_some_and(|n| (self.lo..=self.hi).contains(&n)) }
        params(self) { params! { "lo" => self.lo, "hi" => self.hi } }
        new(bounds: (i64, i64)) { Self { lo: bounds.0, hi: bounds.1 } }
        fn test_range(bounds: (i64, i64));
    }

    #[test]
    fn test_custom_new() {
        let rule = test_range((1, 10));
        assert!(rule.check(&json!(5)));
        assert!(!rule.check(&json!(11)));
    }

    // Test 4: Fallible new
    rule! {
        TestStep { step: u32 } = "testStep";
        check(self, input) { input.as_u64().is_some_and(|n| n % u64::from(self.step) == 0) }
        params(self) { params! { "step" => self.step } }
        new(step: u32) -> &'static str {
            if step == 0 { Err("step must not be zero") } else { Ok(Self { step }) }
        }
        fn test_step(step: u32) -> &'static str;
    }

    #[test]
    fn test_fallible_new() {
        assert!(test_step(0).is_err());
        assert!(test_step(3).unwrap().check(&json!(9)));
    }

    #[test]
    fn test_list_macros() {
        assert!(all_of![even(), positive()].check(&json!(2)));
        assert!(any_of![negative(), even()].check(&json!(2)));
        assert!(one_of![negative(), even()].check(&json!(2)));
        assert!(!none_of![negative(), even()].check(&json!(2)));
        assert!(all_of![].check(&json!(null)));
    }
}
