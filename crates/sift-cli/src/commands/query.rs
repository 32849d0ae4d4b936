use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use sift_confidence::{ConfidenceReport, ConfidenceSignals};
use sift_core::SiftConfig;
use sift_retrieval::{render_context, ContextOptions, RetrievalOutcome, Retriever};
use tracing::debug;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query text
    pub text: String,

    /// Number of passages (defaults to retrieval.top_k)
    #[arg(short = 'k', long = "top-k")]
    pub top_k: Option<usize>,

    /// Config file (defaults to ./sift.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with externally produced confidence signals
    #[arg(long)]
    pub signals: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    #[serde(flatten)]
    outcome: &'a RetrievalOutcome,
    confidence: &'a ConfidenceReport,
}

pub async fn run(args: &QueryArgs) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let signals = match &args.signals {
        Some(path) => read_signals(path)?,
        None => ConfidenceSignals::default(),
    };
    let k = args.top_k.unwrap_or(config.retrieval.top_k);

    let retriever = Retriever::new(config.retrieval.clone());
    let outcome = retriever.retrieve_detailed(&args.text, k).await?;
    let report = ConfidenceReport::from_passages(&outcome.passages, &signals, &config.scoring);

    if args.json {
        let output = QueryOutput {
            query: &args.text,
            outcome: &outcome,
            confidence: &report,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    Ok(render_text(&outcome, &report))
}

fn load_config(path: Option<&Path>) -> Result<SiftConfig> {
    let config = match path {
        Some(path) => SiftConfig::load_file(path)?,
        None => SiftConfig::load(&std::env::current_dir()?)?,
    };
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn read_signals(path: &Path) -> Result<ConfidenceSignals> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read signals file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse signals file {}", path.display()))
}

fn render_text(outcome: &RetrievalOutcome, report: &ConfidenceReport) -> String {
    let mut lines = Vec::with_capacity(outcome.passages.len() + 4);
    lines.push(match outcome.origin {
        Some(origin) => format!("{} passages from {origin}", outcome.passages.len()),
        None => "no passages found".to_string(),
    });
    lines.extend(outcome.passages.iter().enumerate().map(|(rank, p)| {
        let score = p
            .score
            .map_or_else(|| "  n/a".to_string(), |s| format!("{s:.3}"));
        format!("{:>2}. {score}  {}  [{}]", rank + 1, p.label(), p.id)
    }));
    lines.extend(outcome.degradations.iter().map(|event| {
        format!(
            "fallback: {} ({}) -> {}",
            event.component, event.failure, event.fallback_used
        )
    }));

    let context = render_context(&outcome.passages, ContextOptions::default());
    if !context.is_empty() {
        lines.push(String::new());
        lines.push(context);
        lines.push(String::new());
    }
    lines.push(format!(
        "confidence {:.3} (retrieval {:.3}, consistency {:.3}, faithfulness {:.3}, fact {:.3})",
        report.confidence, report.retrieval, report.consistency, report.faithfulness, report.fact
    ));
    lines.join("\n")
}
