//! Public domain suffix searcher

use std::sync::Arc;

use crate::searcher::{CandidateSet, DataSource, DataSourceError, Search, Searcher};

/// Searcher for public domain suffixes (`co.uk`, `com.br`, ...).
///
/// The lookup key is the input's top-level label, uppercased (`UK` for
/// `co.uk`). The data source is expected to map each top-level domain to its
/// public suffixes, uppercased. [`DirectorySource`] reads them from
/// `<root>/<TLD>.json`.
///
/// [`DirectorySource`]: crate::searcher::DirectorySource
#[derive(Debug, Clone)]
pub struct PublicDomainSuffix<D> {
    source: D,
}

impl<D: DataSource> PublicDomainSuffix<D> {
    /// Creates a searcher backed by `source`.
    pub fn new(source: D) -> Self {
        Self { source }
    }

    /// Returns a reference to the data source.
    pub fn source(&self) -> &D {
        &self.source
    }
}

impl<D: DataSource> Searcher for PublicDomainSuffix<D> {
    fn id(&self) -> &str {
        "publicDomainSuffix"
    }

    fn search_key(&self, input: &str) -> Option<String> {
        input
            .rsplit('.')
            .next()
            .filter(|tld| !tld.is_empty())
            .map(str::to_uppercase)
    }

    fn candidates(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        self.source.resolve(key)
    }
}

/// Validates that a string is a public domain suffix known to `source`.
pub fn public_domain_suffix<D: DataSource>(source: D) -> Search<PublicDomainSuffix<D>> {
    Search::new(PublicDomainSuffix::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use crate::searcher::StaticSource;
    use serde_json::json;

    fn rule() -> Search<PublicDomainSuffix<StaticSource>> {
        public_domain_suffix(
            StaticSource::new()
                .with("UK", ["UK", "CO.UK", "AC.UK"])
                .with("BR", ["COM.BR"]),
        )
    }

    #[test]
    fn test_key_is_top_level_label() {
        let searcher = PublicDomainSuffix::new(StaticSource::new());
        assert_eq!(searcher.search_key("co.uk").as_deref(), Some("UK"));
        assert_eq!(searcher.search_key("br").as_deref(), Some("BR"));
        assert_eq!(searcher.search_key("co."), None);
        assert_eq!(searcher.search_key(""), None);
    }

    #[test]
    fn test_known_suffixes() {
        assert!(rule().check(&json!("co.uk")));
        assert!(rule().check(&json!("COM.br")));
        assert!(rule().check(&json!("uk")));
        assert!(!rule().check(&json!("google.co.uk")));
    }

    #[test]
    fn test_unknown_tld_rejects() {
        let err = rule().assert(&json!("com.zz")).unwrap_err();
        assert_eq!(err.id, "publicDomainSuffix");
        assert_eq!(err.message, "\"com.zz\" must be a public domain suffix");
    }

    #[test]
    fn test_undefined_input_accepts() {
        assert!(rule().check(&json!(null)));
        assert!(rule().check(&json!("")));
        assert!(!rule().check(&json!(5)));
    }
}
