//! Chroma v1 HTTP wire types.
//!
//! Query responses are column-major: one outer entry per query text, one
//! inner entry per hit. Only the first query's columns are used.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sift_core::models::{PassageOrigin, ScoredPassage};

/// Columns requested from the store on every query.
pub const INCLUDE_FIELDS: [&str; 3] = ["documents", "metadatas", "distances"];

/// Response of `GET /api/v1/collections/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/v1/collections/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub query_texts: [&'a str; 1],
    pub n_results: usize,
    pub include: [&'static str; 3],
}

impl<'a> QueryRequest<'a> {
    pub fn new(query: &'a str, k: usize) -> Self {
        Self {
            query_texts: [query],
            n_results: k,
            include: INCLUDE_FIELDS,
        }
    }
}

/// Response of a query. Every column may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub ids: Vec<Vec<String>>,
    #[serde(default)]
    pub documents: Option<Vec<Option<Vec<Option<String>>>>>,
    #[serde(default)]
    pub metadatas: Option<Vec<Option<Vec<Option<Value>>>>>,
    #[serde(default)]
    pub distances: Option<Vec<Option<Vec<Value>>>>,
}

impl QueryResponse {
    /// Zip the first query's columns into passages, keeping store order.
    pub fn into_passages(self) -> Vec<ScoredPassage> {
        let Some(ids) = self.ids.into_iter().next() else {
            return Vec::new();
        };
        let documents = first_column(self.documents);
        let metadatas = first_column(self.metadatas);
        let distances = first_column(self.distances);

        ids.into_iter()
            .enumerate()
            .map(|(i, id)| {
                let content = documents.get(i).cloned().flatten().unwrap_or_default();
                let metadata = metadatas.get(i).cloned().flatten();
                let score = distances.get(i).and_then(Value::as_f64).and_then(distance_to_score);
                ScoredPassage {
                    id,
                    title: metadata_str(metadata.as_ref(), "title"),
                    content,
                    source: metadata_str(metadata.as_ref(), "source"),
                    score,
                    origin: PassageOrigin::Remote,
                }
            })
            .collect()
    }
}

/// Map a store distance to a similarity in `[0, 1]`.
///
/// `1 - d`, floored at zero and capped at one. Non-finite distances have no
/// score.
pub fn distance_to_score(distance: f64) -> Option<f64> {
    distance
        .is_finite()
        .then(|| (1.0 - distance).clamp(0.0, 1.0))
}

fn first_column<T>(column: Option<Vec<Option<Vec<T>>>>) -> Vec<T> {
    column
        .and_then(|c| c.into_iter().next())
        .flatten()
        .unwrap_or_default()
}

fn metadata_str(metadata: Option<&Value>, key: &str) -> Option<String> {
    metadata?.get(key)?.as_str().map(str::to_string)
}
