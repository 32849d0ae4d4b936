use serde::{Deserialize, Serialize};

/// A record of the persisted local index.
///
/// Written by the ingestion process, read-only here. Field names are part of
/// the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    pub embedding: Vec<f32>,
}

impl IndexEntry {
    /// Embedding dimensionality of this entry.
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
