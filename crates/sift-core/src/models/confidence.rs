use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Weights of the four confidence signals. Raw values need not sum to one;
/// they are normalized before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    /// Retrieval relevance.
    pub alpha: f64,
    /// Answer/context consistency.
    pub beta: f64,
    /// Faithfulness.
    pub gamma: f64,
    /// Fact-check entailment.
    pub delta: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            beta: defaults::DEFAULT_BETA,
            gamma: defaults::DEFAULT_GAMMA,
            delta: defaults::DEFAULT_DELTA,
        }
    }
}

impl ConfidenceWeights {
    pub fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma + self.delta
    }

    /// Divide every weight by the raw sum. A non-positive or non-finite sum
    /// is treated as 1, so the weights pass through unscaled.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        let divisor = if sum > 0.0 && sum.is_finite() { sum } else { 1.0 };
        Self {
            alpha: self.alpha / divisor,
            beta: self.beta / divisor,
            gamma: self.gamma / divisor,
            delta: self.delta / divisor,
        }
    }
}

/// Signals produced outside the retrieval engine, typically by the answer
/// generation step. Missing signals score as "no evidence".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceSignals {
    /// Similarity of the generated answer to each retrieved chunk.
    pub chunk_similarities: Vec<f64>,
    pub unsupported_claims: u32,
    pub total_claims: u32,
    pub entailment_probabilities: Vec<f64>,
    pub entailment_weights: Option<Vec<f64>>,
}

/// Weighting applied to ranks when aggregating retrieval similarities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDiscount {
    /// `1 / ln(rank + 1)`.
    #[default]
    Logarithmic,
    /// `1 / rank`.
    Reciprocal,
    /// Every rank weighs the same (plain mean).
    Uniform,
}

impl RankDiscount {
    /// Weight for a 1-based rank.
    pub fn weight(self, rank: usize) -> f64 {
        let r = rank.max(1) as f64;
        match self {
            Self::Logarithmic => 1.0 / (r + 1.0).ln(),
            Self::Reciprocal => 1.0 / r,
            Self::Uniform => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let w = ConfidenceWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_rescales() {
        let w = ConfidenceWeights::new(2.0, 1.0, 1.0, 0.0).normalized();
        assert!((w.alpha - 0.5).abs() < 1e-12);
        assert!((w.beta - 0.25).abs() < 1e-12);
        assert_eq!(w.delta, 0.0);
    }

    #[test]
    fn zero_sum_passes_through() {
        let w = ConfidenceWeights::new(0.0, 0.0, 0.0, 0.0).normalized();
        assert_eq!(w.sum(), 0.0);
    }

    #[test]
    fn log_discount_decays() {
        let d = RankDiscount::Logarithmic;
        assert!(d.weight(1) > d.weight(2));
        assert!(d.weight(2) > d.weight(5));
        assert!(d.weight(1000) > 0.0);
    }

    #[test]
    fn reciprocal_and_uniform_weights() {
        assert_eq!(RankDiscount::Reciprocal.weight(1), 1.0);
        assert_eq!(RankDiscount::Reciprocal.weight(4), 0.25);
        assert_eq!(RankDiscount::Uniform.weight(7), 1.0);
        // rank 0 is treated as rank 1
        assert_eq!(RankDiscount::Reciprocal.weight(0), 1.0);
    }

    #[test]
    fn discount_names_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            discount: RankDiscount,
        }
        let w: Wrapper = toml::from_str("discount = \"reciprocal\"").unwrap();
        assert_eq!(w.discount, RankDiscount::Reciprocal);
    }
}
