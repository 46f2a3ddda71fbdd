//! Set-membership rules
//!
//! A [`Searcher`] describes a rule of the form "the input is one of the
//! candidates for its key": it derives a lookup key from the input, gets the
//! candidate set for that key, and tests the normalized input against it.
//! [`Search`] turns any searcher into a [`Rule`].
//!
//! The candidates may be fixed ([`InSet`]) or come from a [`DataSource`]
//! ([`PublicDomainSuffix`]). A source that cannot resolve a key makes the
//! rule reject the input; the source's error is logged at debug level and
//! never reaches the caller.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//! use sieve_validator::searcher::StaticSource;
//!
//! let source = StaticSource::new().with("UK", ["CO.UK", "AC.UK"]);
//! let rule = public_domain_suffix(source);
//!
//! assert!(rule.check(&json!("co.uk")));
//! assert!(!rule.check(&json!("example.uk")));
//! assert!(!rule.check(&json!("co.fr"))); // no candidates for FR
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Params, Rule};

pub mod public_suffix;
pub mod source;

pub use public_suffix::{PublicDomainSuffix, public_domain_suffix};
pub use source::{
    CachedSource, CandidateSet, DataSource, DataSourceError, DirectorySource, StaticSource, cached,
};

// ============================================================================
// SEARCHER TRAIT
// ============================================================================

/// A membership test against a candidate set chosen from the input.
pub trait Searcher: fmt::Debug + Send + Sync {
    /// Stable identifier of the resulting rule.
    fn id(&self) -> &str;

    /// Derives the lookup key from the input text.
    ///
    /// `None` means the input selects no candidates.
    fn search_key(&self, input: &str) -> Option<String>;

    /// Returns the candidates for `key`.
    fn candidates(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError>;

    /// Brings the input into the form candidates are stored in.
    ///
    /// Defaults to uppercase, making membership case-insensitive against
    /// uppercase candidate sets.
    fn normalize(&self, input: &str) -> String {
        input.to_uppercase()
    }

    /// Named parameters the rule contributes to its message.
    fn params(&self) -> Params {
        Params::new()
    }
}

// ============================================================================
// SEARCH RULE
// ============================================================================

/// Adapts a [`Searcher`] into a [`Rule`].
///
/// - Non-string inputs (other than `null`) are rejected.
/// - `null` and `""` are undefined inputs: they are accepted when they select
///   no candidates, and otherwise tested like any other input.
/// - A candidate lookup that fails rejects the input.
#[derive(Debug, Clone)]
pub struct Search<S> {
    searcher: S,
}

impl<S: Searcher> Search<S> {
    /// Creates the rule.
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }

    /// Returns a reference to the searcher.
    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    fn candidates_for(&self, text: &str) -> Option<Arc<CandidateSet>> {
        let Some(key) = self.searcher.search_key(text) else {
            return Some(Arc::default());
        };

        match self.searcher.candidates(&key) {
            Ok(candidates) => Some(candidates),
            Err(error) => {
                tracing::debug!(
                    rule = self.searcher.id(),
                    key = %key,
                    error = %error,
                    "candidate lookup failed"
                );
                None
            }
        }
    }
}

impl<S: Searcher> Rule for Search<S> {
    fn id(&self) -> &str {
        self.searcher.id()
    }

    fn check(&self, input: &Value) -> bool {
        let text = match input {
            Value::Null => "",
            Value::String(s) => s.as_str(),
            _ => return false,
        };

        let Some(candidates) = self.candidates_for(text) else {
            return false;
        };

        if text.is_empty() && candidates.is_empty() {
            return true;
        }
        candidates.contains(&self.searcher.normalize(text))
    }

    fn params(&self) -> Params {
        self.searcher.params()
    }
}

// ============================================================================
// IN
// ============================================================================

/// Searcher over a fixed set of strings.
#[derive(Debug, Clone)]
pub struct InSet {
    candidates: Arc<CandidateSet>,
    case_insensitive: bool,
}

impl InSet {
    /// Creates a case-sensitive searcher over `haystack`.
    pub fn new<I, T>(haystack: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            candidates: Arc::new(haystack.into_iter().collect()),
            case_insensitive: false,
        }
    }

    /// Compares ignoring case.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(self) -> Self {
        let candidates = self.candidates.iter().map(str::to_uppercase).collect();
        Self {
            candidates: Arc::new(candidates),
            case_insensitive: true,
        }
    }
}

impl Searcher for InSet {
    fn id(&self) -> &str {
        "in"
    }

    fn search_key(&self, _input: &str) -> Option<String> {
        Some(String::new())
    }

    fn candidates(&self, _key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        Ok(Arc::clone(&self.candidates))
    }

    fn normalize(&self, input: &str) -> String {
        if self.case_insensitive {
            input.to_uppercase()
        } else {
            input.to_owned()
        }
    }

    fn params(&self) -> Params {
        let mut haystack: Vec<&str> = self.candidates.iter().collect();
        haystack.sort_unstable();
        crate::params! { "haystack" => format!("[{}]", haystack.join(", ")) }
    }
}

/// Validates that a string is one of `haystack`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_validator::prelude::*;
///
/// let rule = in_set(["red", "green"]);
/// assert!(rule.check(&json!("red")));
/// assert!(!rule.check(&json!("RED")));
///
/// let error = rule.assert(&json!("blue")).unwrap_err();
/// assert_eq!(error.message, "\"blue\" must be in [green, red]");
/// ```
pub fn in_set<I, T>(haystack: I) -> Search<InSet>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    Search::new(InSet::new(haystack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct FirstLetter(StaticSource);

    impl Searcher for FirstLetter {
        fn id(&self) -> &str {
            "firstLetter"
        }

        fn search_key(&self, input: &str) -> Option<String> {
            input.chars().next().map(|c| c.to_uppercase().collect())
        }

        fn candidates(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
            self.0.resolve(key)
        }
    }

    fn rule() -> Search<FirstLetter> {
        Search::new(FirstLetter(
            StaticSource::new().with("A", ["APPLE", "APRICOT"]),
        ))
    }

    #[test]
    fn test_membership_is_normalized() {
        assert!(rule().check(&json!("apple")));
        assert!(rule().check(&json!("Apricot")));
        assert!(!rule().check(&json!("avocado")));
    }

    #[test]
    fn test_lookup_failure_rejects() {
        let err = rule().assert(&json!("banana")).unwrap_err();
        assert_eq!(err.id, "firstLetter");
        assert!(err.children.is_empty());
    }

    #[test]
    fn test_undefined_input_without_candidates_accepts() {
        assert!(rule().check(&json!(null)));
        assert!(rule().check(&json!("")));
    }

    #[test]
    fn test_non_string_rejects() {
        assert!(!rule().check(&json!(1)));
        assert!(!rule().check(&json!(["apple"])));
    }

    #[test]
    fn test_in_set_case_insensitive() {
        let rule = Search::new(InSet::new(["Red"]).case_insensitive());
        assert!(rule.check(&json!("rEd")));
        assert!(!in_set(["Red"]).check(&json!("rEd")));
        assert!(!in_set(["Red"]).check(&json!("")));
    }
}
