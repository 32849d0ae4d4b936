use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{ConfidenceWeights, RankDiscount};

/// Confidence scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ConfidenceWeights,
    pub rank_discount: RankDiscount,
    pub faithfulness_epsilon: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
            rank_discount: RankDiscount::default(),
            faithfulness_epsilon: defaults::DEFAULT_FAITHFULNESS_EPSILON,
        }
    }
}
