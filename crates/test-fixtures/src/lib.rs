//! Fixture loader for sift integration tests: index files, recorded remote
//! responses, and helpers for writing throwaway indexes.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use sift_core::models::IndexEntry;
use tempfile::TempDir;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Index entries of a fixture under `index/`.
pub fn load_index(name: &str) -> Vec<IndexEntry> {
    load_fixture(&format!("index/{name}.json"))
}

/// A temporary directory holding an index file. The file is removed when
/// this value is dropped.
pub struct TempIndex {
    dir: TempDir,
}

impl TempIndex {
    /// An empty directory; the index file does not exist yet.
    pub fn missing() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}")),
        }
    }

    /// Write `entries` as the index file.
    pub fn with_entries(entries: &[IndexEntry]) -> Self {
        let index = Self::missing();
        index.write(entries);
        index
    }

    /// Copy a fixture under `index/` into place.
    pub fn from_fixture(name: &str) -> Self {
        let index = Self::missing();
        let source = fixture_path(&format!("index/{name}.json"));
        std::fs::copy(&source, index.path())
            .unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", source.display(), e));
        index
    }

    /// Overwrite the index file with `entries`.
    pub fn write(&self, entries: &[IndexEntry]) {
        let json = serde_json::to_vec_pretty(entries)
            .unwrap_or_else(|e| panic!("Failed to serialize index: {e}"));
        std::fs::write(self.path(), json)
            .unwrap_or_else(|e| panic!("Failed to write index {}: {}", self.path().display(), e));
    }

    /// Path of the index file inside the temporary directory.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("index.json")
    }
}

/// Build an index entry with generated text fields.
pub fn entry(id: &str, embedding: Vec<f32>) -> IndexEntry {
    IndexEntry {
        id: id.to_string(),
        title: format!("Title {id}"),
        content: format!("Content of {id}"),
        source: format!("docs/{id}.md"),
        embedding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_embeddings::HashEmbedder;

    #[test]
    fn handbook_embeddings_match_hash_of_title() {
        let entries = load_index("handbook");
        assert_eq!(entries.len(), 3);
        for e in &entries {
            let expected = HashEmbedder::vector(&e.title, e.dimensions());
            for (a, b) in e.embedding.iter().zip(&expected) {
                assert!((a - b).abs() < 1e-6, "{}: {a} vs {b}", e.id);
            }
        }
    }

    #[test]
    fn remote_fixtures_present() {
        assert!(fixture_exists("remote/collection.json"));
        let value = load_fixture_value("remote/query_response.json");
        assert_eq!(value["ids"][0].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn temp_index_round_trip() {
        let index = TempIndex::missing();
        assert!(!index.path().exists());
        index.write(&[entry("a", vec![1.0, 0.0])]);
        let content = std::fs::read_to_string(index.path()).unwrap();
        let back: Vec<IndexEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(back[0].source, "docs/a.md");
    }
}
