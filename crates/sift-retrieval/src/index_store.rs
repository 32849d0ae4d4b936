//! Persisted local index: a JSON array of `IndexEntry` records.
//!
//! "No index" is a normal state and loads as empty. A corrupt index is
//! logged and also loads as empty. With caching on, the parsed index is
//! reused until the file's content hash changes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::sync::Cache;
use sift_core::config::RetrievalConfig;
use sift_core::errors::IndexError;
use sift_core::models::IndexEntry;
use tracing::{debug, error, info, warn};

type Entries = Arc<Vec<IndexEntry>>;

#[derive(Clone)]
struct CachedIndex {
    content_hash: blake3::Hash,
    entries: Entries,
}

/// Reader for the local JSON index.
pub struct LocalIndexStore {
    path: PathBuf,
    cache: Option<Cache<PathBuf, CachedIndex>>,
}

impl LocalIndexStore {
    /// Store that re-reads and re-parses the file on every load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
        }
    }

    /// Store that keeps the parsed index until the file content changes.
    pub fn with_cache(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Some(Cache::builder().max_capacity(1).build()),
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        if config.cache_index {
            Self::with_cache(&config.index_path)
        } else {
            Self::new(&config.index_path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index, never failing. Errors are logged and yield an empty
    /// index.
    pub fn load(&self) -> Entries {
        match self.try_load() {
            Ok(entries) => entries,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to load local index");
                Arc::new(Vec::new())
            }
        }
    }

    /// Load the index. A missing file is `Ok` and empty.
    pub fn try_load(&self) -> Result<Entries, IndexError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "local index not found");
                return Ok(Arc::new(Vec::new()));
            }
            Err(e) => {
                return Err(IndexError::Io {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let content_hash = blake3::hash(&bytes);
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(&self.path)) {
            if cached.content_hash == content_hash {
                debug!(path = %self.path.display(), "local index cache hit");
                return Ok(cached.entries);
            }
        }

        let parsed: Vec<IndexEntry> =
            serde_json::from_slice(&bytes).map_err(|e| IndexError::Parse {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        let entries = Arc::new(retain_uniform_dimensions(parsed));
        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "local index loaded"
        );

        if let Some(cache) = &self.cache {
            cache.insert(
                self.path.clone(),
                CachedIndex {
                    content_hash,
                    entries: Arc::clone(&entries),
                },
            );
        }
        Ok(entries)
    }

    /// Drop any cached copy of the index.
    pub fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(&self.path);
        }
    }
}

/// Query dimensionality for an index: the length of the first non-empty
/// embedding, or `default` when there is none.
pub fn query_dimensions(entries: &[IndexEntry], default: usize) -> usize {
    entries
        .iter()
        .map(IndexEntry::dimensions)
        .find(|&d| d > 0)
        .unwrap_or(default)
}

/// Keep only entries whose dimensionality matches the first non-empty
/// embedding. Entries without an embedding cannot be ranked and are dropped.
fn retain_uniform_dimensions(mut entries: Vec<IndexEntry>) -> Vec<IndexEntry> {
    let expected = query_dimensions(&entries, 0);
    let before = entries.len();
    entries.retain(|e| expected > 0 && e.dimensions() == expected);
    let dropped = before - entries.len();
    if dropped > 0 {
        warn!(
            expected,
            dropped, "skipping index entries with missing or mismatched embeddings"
        );
    }
    entries
}
