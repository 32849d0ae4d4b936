use clap::Parser;
use sift_cli::{run, Cli};
use sift_core::tracing_setup::{init_tracing, init_tracing_json};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.log_json {
        init_tracing_json();
    } else {
        init_tracing();
    }

    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}
