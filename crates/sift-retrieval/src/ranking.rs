//! Brute-force cosine ranking over the local index.

use std::cmp::Ordering;

use rayon::prelude::*;
use sift_core::models::{IndexEntry, ScoredPassage};
use sift_embeddings::cosine_similarity;

/// Below this many entries scoring stays on the calling thread.
const PARALLEL_THRESHOLD: usize = 2048;

/// Score every entry against `query` and return the best `k`, highest
/// cosine first. Ties keep index order, so equal inputs give equal output.
pub fn top_k(entries: &[IndexEntry], query: &[f32], k: usize) -> Vec<ScoredPassage> {
    let scores: Vec<f64> = if entries.len() >= PARALLEL_THRESHOLD {
        entries
            .par_iter()
            .map(|e| cosine_similarity(query, &e.embedding))
            .collect()
    } else {
        entries
            .iter()
            .map(|e| cosine_similarity(query, &e.embedding))
            .collect()
    };

    let mut order: Vec<usize> = (0..entries.len()).collect();
    // sort_by is stable.
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order.truncate(k);

    order
        .into_iter()
        .map(|i| ScoredPassage::from_entry(&entries[i], scores[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, embedding: Vec<f32>) -> IndexEntry {
        IndexEntry {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            source: String::new(),
            embedding,
        }
    }

    #[test]
    fn best_match_first() {
        let entries = vec![
            entry("x", vec![1.0, 0.0]),
            entry("y", vec![0.6, 0.8]),
            entry("z", vec![0.0, 1.0]),
        ];
        let ranked = top_k(&entries, &[0.0, 1.0], 3);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["z", "y", "x"]);
        assert!((ranked[0].score.unwrap() - 1.0).abs() < 1e-9);
        assert!((ranked[1].score.unwrap() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn ties_keep_index_order() {
        let entries = vec![
            entry("a", vec![1.0, 0.0]),
            entry("b", vec![2.0, 0.0]),
            entry("c", vec![4.0, 0.0]),
        ];
        let ranked = top_k(&entries, &[1.0, 0.0], 2);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn k_larger_than_index() {
        let entries = vec![entry("a", vec![1.0])];
        assert_eq!(top_k(&entries, &[1.0], 10).len(), 1);
        assert!(top_k(&[], &[1.0], 10).is_empty());
    }

    #[test]
    fn negative_scores_are_kept() {
        let entries = vec![entry("opposite", vec![-1.0, 0.0])];
        let ranked = top_k(&entries, &[1.0, 0.0], 1);
        assert!((ranked[0].score.unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let entries: Vec<IndexEntry> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| entry(&i.to_string(), vec![(i % 7) as f32, 1.0]))
            .collect();
        let ranked = top_k(&entries, &[6.0, 1.0], 5);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["6", "13", "20", "27", "34"]);
    }
}
