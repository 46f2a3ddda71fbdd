//! Data sources for searcher rules
//!
//! A [`DataSource`] maps a lookup key to the set of candidate strings a
//! searcher tests membership against. Sources are shared by every
//! evaluation of a tree, so they must be safe for concurrent reads.
//!
//! - [`StaticSource`] - an in-memory map, fixed at construction
//! - [`DirectorySource`] - one JSON array file per key
//! - [`CachedSource`] - memoizes another source with `moka`

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// CANDIDATE SET
// ============================================================================

/// The strings a searcher input may be.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    items: HashSet<String>,
}

impl CandidateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `candidate` is in the set.
    pub fn contains(&self, candidate: &str) -> bool {
        self.items.contains(candidate)
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the candidates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// A data source could not produce the candidates for a key.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DataSourceError {
    /// The source has no entry for the key.
    #[error("no candidates for key `{key}`")]
    NotFound {
        /// The key looked up.
        key: String,
    },

    /// The key cannot name an entry of this source.
    #[error("invalid lookup key `{key}`")]
    InvalidKey {
        /// The key looked up.
        key: String,
    },

    /// Reading the backing file failed.
    #[error("failed to read `{}`", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON array of strings.
    #[error("failed to parse `{}`", path.display())]
    Parse {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// DATA SOURCE TRAIT
// ============================================================================

/// Supplies candidate sets by key.
///
/// # Examples
///
/// ```
/// use sieve_validator::searcher::{DataSource, StaticSource};
///
/// let source = StaticSource::new().with("UK", ["CO.UK", "AC.UK"]);
/// assert!(source.resolve("UK").unwrap().contains("CO.UK"));
/// assert!(source.resolve("FR").is_err());
/// ```
pub trait DataSource: fmt::Debug + Send + Sync {
    /// Returns the candidates for `key`.
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError>;
}

impl<D: DataSource + ?Sized> DataSource for Arc<D> {
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        (**self).resolve(key)
    }
}

impl<D: DataSource + ?Sized> DataSource for Box<D> {
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        (**self).resolve(key)
    }
}

// ============================================================================
// STATIC SOURCE
// ============================================================================

/// An in-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: HashMap<String, Arc<CandidateSet>>,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the candidates for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<I, S>(mut self, key: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, candidates);
        self
    }

    /// Adds the candidates for `key` in place, replacing any previous entry.
    pub fn insert<I, S>(&mut self, key: impl Into<String>, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(key.into(), Arc::new(candidates.into_iter().collect()));
    }
}

impl DataSource for StaticSource {
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound {
                key: key.to_owned(),
            })
    }
}

// ============================================================================
// DIRECTORY SOURCE
// ============================================================================

/// Reads candidates from `<root>/<KEY>.json`, a JSON array of strings.
///
/// The file is read on every lookup; wrap the source in a [`CachedSource`]
/// to read each key once.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding the files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DataSourceError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_'));
        if valid {
            Ok(self.root.join(format!("{key}.json")))
        } else {
            Err(DataSourceError::InvalidKey {
                key: key.to_owned(),
            })
        }
    }
}

impl DataSource for DirectorySource {
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        let path = self.path_for(key)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataSourceError::NotFound {
                    key: key.to_owned(),
                });
            }
            Err(source) => return Err(DataSourceError::Io { path, source }),
        };

        serde_json::from_str::<CandidateSet>(&content)
            .map(Arc::new)
            .map_err(|source| DataSourceError::Parse { path, source })
    }
}

// ============================================================================
// CACHED SOURCE
// ============================================================================

/// Default cache capacity (1000 keys)
const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Memoizes the candidate sets of another source.
///
/// Successful lookups are cached per key; failures are not, so a source
/// that recovers is picked up on the next lookup.
///
/// # Cache Behavior
///
/// - Thread-safe using lock-free `moka` cache
/// - Bounded, with configurable capacity (default: 1000 keys)
/// - Cache persists for the lifetime of the source
pub struct CachedSource<D> {
    inner: D,
    cache: moka::sync::Cache<String, Arc<CandidateSet>>,
}

impl<D: DataSource> CachedSource<D> {
    /// Creates a cached source with default capacity (1000 keys).
    pub fn new(inner: D) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cached source with custom capacity.
    pub fn with_capacity(inner: D, capacity: u64) -> Self {
        Self {
            inner,
            cache: moka::sync::Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns a reference to the wrapped source.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Returns the number of cached keys.
    pub fn cache_size(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

impl<D: DataSource> DataSource for CachedSource<D> {
    fn resolve(&self, key: &str) -> Result<Arc<CandidateSet>, DataSourceError> {
        if let Some(candidates) = self.cache.get(key) {
            return Ok(candidates);
        }

        tracing::debug!(key, "candidate cache miss");
        let candidates = self.inner.resolve(key)?;
        self.cache.insert(key.to_owned(), Arc::clone(&candidates));
        Ok(candidates)
    }
}

// Manual Debug impl since the cache is not worth printing
impl<D: fmt::Debug> fmt::Debug for CachedSource<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedSource")
            .field("inner", &self.inner)
            .field("capacity", &self.cache.policy().max_capacity())
            .finish_non_exhaustive()
    }
}

/// Wraps `source` in a [`CachedSource`].
pub fn cached<D: DataSource>(source: D) -> CachedSource<D> {
    CachedSource::new(source)
}

// ============================================================================
// TESTS
// ============================================================================
