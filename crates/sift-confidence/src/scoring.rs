//! The five confidence signals and their combination.

use sift_core::config::defaults::DEFAULT_FAITHFULNESS_EPSILON;
use sift_core::models::{ConfidenceWeights, RankDiscount};

/// Clamp into `[0, 1]`. Non-finite values map to 0.
pub fn clamp01(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Rank-discounted mean of similarities given in rank order, with the
/// default logarithmic discount `1 / ln(rank + 1)`.
///
/// A highly similar passage at rank 1 counts more than the same similarity
/// at rank 5. Empty input scores 0.
pub fn retrieval_score(similarities: &[f64]) -> f64 {
    retrieval_score_with(similarities, RankDiscount::Logarithmic)
}

/// [`retrieval_score`] with an explicit rank discount.
pub fn retrieval_score_with(similarities: &[f64], discount: RankDiscount) -> f64 {
    let (num, den) = similarities
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &s)| {
            let w = discount.weight(i + 1);
            (num + w * clamp01(s), den + w)
        });
    if den > 0.0 {
        clamp01(num / den)
    } else {
        0.0
    }
}

/// Mean alignment of the answer with each retrieved chunk. Empty input
/// scores 0.
pub fn consistency_score(chunk_similarities: &[f64]) -> f64 {
    mean01(chunk_similarities)
}

/// Share of supported claims, `1 - unsupported / (total + 1e-6)`.
/// No claims at all is trivially faithful.
pub fn faithfulness_score(unsupported_claims: usize, total_claims: usize) -> f64 {
    faithfulness_score_with_epsilon(unsupported_claims, total_claims, DEFAULT_FAITHFULNESS_EPSILON)
}

/// [`faithfulness_score`] with an explicit epsilon. A negative or
/// non-finite epsilon is treated as 0.
pub fn faithfulness_score_with_epsilon(
    unsupported_claims: usize,
    total_claims: usize,
    epsilon: f64,
) -> f64 {
    if total_claims == 0 {
        return 1.0;
    }
    let eps = if epsilon.is_finite() && epsilon > 0.0 {
        epsilon
    } else {
        0.0
    };
    clamp01(1.0 - unsupported_claims as f64 / (total_claims as f64 + eps))
}

/// Mean entailment probability, weighted when usable weights are given.
///
/// Only the first N weights are used for N probabilities; a missing weight
/// counts as 0 and negative weights count as 0. When the usable weights sum
/// to 0 the plain mean is returned. Empty input scores 0.
pub fn fact_score(entailment_probabilities: &[f64], weights: Option<&[f64]>) -> f64 {
    if entailment_probabilities.is_empty() {
        return 0.0;
    }
    let Some(weights) = weights else {
        return mean01(entailment_probabilities);
    };

    let usable = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
    let (num, den) = entailment_probabilities
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(num, den), (&p, &w)| {
            let w = usable(w);
            (num + clamp01(p) * w, den + w)
        });

    if den > 0.0 {
        clamp01(num / den)
    } else {
        mean01(entailment_probabilities)
    }
}

/// Weighted combination of the four signals.
///
/// Weights are normalized to sum to 1 first. If their raw sum is not
/// positive the divisor is 1, so all-zero weights give 0.
pub fn confidence_score(
    retrieval: f64,
    consistency: f64,
    faithfulness: f64,
    fact: f64,
    weights: &ConfidenceWeights,
) -> f64 {
    let w = weights.normalized();
    clamp01(
        w.alpha * clamp01(retrieval)
            + w.beta * clamp01(consistency)
            + w.gamma * clamp01(faithfulness)
            + w.delta * clamp01(fact),
    )
}

fn mean01(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    clamp01(values.iter().map(|&v| clamp01(v)).sum::<f64>() / values.len() as f64)
}
