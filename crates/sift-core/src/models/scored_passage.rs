use std::fmt;

use serde::{Deserialize, Serialize};

use super::IndexEntry;

/// Which tier produced a passage. A single retrieval never mixes tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassageOrigin {
    Remote,
    Local,
}

impl fmt::Display for PassageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// A retrieval result, produced fresh per query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPassage {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub source: Option<String>,
    /// Similarity in `[0, 1]` for remote results, raw cosine in `[-1, 1]`
    /// for local results. `None` when the remote store reported no usable
    /// distance.
    pub score: Option<f64>,
    pub origin: PassageOrigin,
}

impl ScoredPassage {
    /// Build a local-tier passage from an index entry and its cosine score.
    pub fn from_entry(entry: &IndexEntry, score: f64) -> Self {
        Self {
            id: entry.id.clone(),
            title: Some(entry.title.clone()),
            content: entry.content.clone(),
            source: Some(entry.source.clone()),
            score: Some(score),
            origin: PassageOrigin::Local,
        }
    }

    /// Best human-readable label: source, then title, then id.
    pub fn label(&self) -> &str {
        self.source
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.title.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or(&self.id)
    }
}
