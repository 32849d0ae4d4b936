//! Library half of the `sift` binary. Commands render their output to a
//! `String` so they can be driven from tests.

pub mod commands;

use clap::{Parser, Subcommand};

use commands::embed::EmbedArgs;
use commands::query::QueryArgs;
use commands::score::ScoreArgs;

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Hybrid passage retrieval with confidence scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve passages for a query and score them
    Query(QueryArgs),

    /// Combine four signals into one confidence score
    Score(ScoreArgs),

    /// Print the deterministic hash embedding of a text
    Embed(EmbedArgs),
}

/// Run a parsed command and return what should be printed on stdout.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Command::Query(args) => commands::query::run(&args).await,
        Command::Score(args) => commands::score::run(&args),
        Command::Embed(args) => commands::embed::run(&args),
    }
}
