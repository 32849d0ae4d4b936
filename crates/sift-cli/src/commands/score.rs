use anyhow::{ensure, Result};
use clap::Args;
use serde::Serialize;
use sift_confidence::{confidence_score, ConfidenceWeights};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Retrieval relevance score
    #[arg(long)]
    pub rs: f64,

    /// Answer/context consistency score
    #[arg(long)]
    pub cs: f64,

    /// Faithfulness score
    #[arg(long)]
    pub fs: f64,

    /// Fact-check score
    #[arg(long)]
    pub fact: f64,

    /// Weights as alpha,beta,gamma,delta (normalized before use)
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Print JSON instead of a bare number
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ScoreOutput {
    confidence: f64,
    weights: ConfidenceWeights,
}

pub fn run(args: &ScoreArgs) -> Result<String> {
    let weights = match &args.weights {
        Some(w) => {
            ensure!(w.len() == 4, "expected 4 weights, got {}", w.len());
            ConfidenceWeights::new(w[0], w[1], w[2], w[3])
        }
        None => ConfidenceWeights::default(),
    };
    let confidence = confidence_score(args.rs, args.cs, args.fs, args.fact, &weights);

    if args.json {
        let output = ScoreOutput {
            confidence,
            weights: weights.normalized(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    Ok(format!("{confidence:.4}"))
}
