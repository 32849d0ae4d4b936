//! # sift-confidence
//!
//! Pure scoring functions. Every input is clamped into `[0, 1]` (non-finite
//! values count as 0) and every output is in `[0, 1]`. Nothing here panics.

pub mod report;
pub mod scoring;

pub use report::ConfidenceReport;
pub use scoring::{
    clamp01, confidence_score, consistency_score, fact_score, faithfulness_score,
    faithfulness_score_with_epsilon, retrieval_score, retrieval_score_with,
};
pub use sift_core::models::{ConfidenceSignals, ConfidenceWeights, RankDiscount};
