//! Confidence breakdown surfaced next to the retrieved passages.

use serde::{Deserialize, Serialize};
use sift_core::config::ScoringConfig;
use sift_core::models::{ConfidenceSignals, ConfidenceWeights, ScoredPassage};

use crate::scoring::{
    confidence_score, consistency_score, fact_score, faithfulness_score_with_epsilon,
    retrieval_score_with,
};

/// Every signal plus the combined confidence, all in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub retrieval: f64,
    pub consistency: f64,
    pub faithfulness: f64,
    pub fact: f64,
    pub confidence: f64,
    /// Normalized weights actually applied.
    pub weights: ConfidenceWeights,
}

impl ConfidenceReport {
    /// Score from raw retrieval similarities in rank order.
    pub fn compute(
        similarities: &[f64],
        signals: &ConfidenceSignals,
        scoring: &ScoringConfig,
    ) -> Self {
        let retrieval = retrieval_score_with(similarities, scoring.rank_discount);
        let consistency = consistency_score(&signals.chunk_similarities);
        let faithfulness = faithfulness_score_with_epsilon(
            signals.unsupported_claims as usize,
            signals.total_claims as usize,
            scoring.faithfulness_epsilon,
        );
        let fact = fact_score(
            &signals.entailment_probabilities,
            signals.entailment_weights.as_deref(),
        );
        let confidence =
            confidence_score(retrieval, consistency, faithfulness, fact, &scoring.weights);

        Self {
            retrieval,
            consistency,
            faithfulness,
            fact,
            confidence,
            weights: scoring.weights.normalized(),
        }
    }

    /// Score retrieved passages in the order returned. Passages without a
    /// score are skipped for the retrieval signal.
    pub fn from_passages(
        passages: &[ScoredPassage],
        signals: &ConfidenceSignals,
        scoring: &ScoringConfig,
    ) -> Self {
        let similarities: Vec<f64> = passages.iter().filter_map(|p| p.score).collect();
        Self::compute(&similarities, signals, scoring)
    }
}
