use anyhow::Result;
use clap::Args;
use sift_core::config::defaults::DEFAULT_EMBEDDING_DIMENSIONS;
use sift_core::traits::IEmbeddingProvider;
use sift_embeddings::HashEmbedder;

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Text to embed
    pub text: String,

    /// Number of dimensions
    #[arg(long, default_value_t = DEFAULT_EMBEDDING_DIMENSIONS)]
    pub dim: usize,
}

/// Render the embedding as a JSON array.
pub fn run(args: &EmbedArgs) -> Result<String> {
    let vector = HashEmbedder::new().embed(&args.text, args.dim)?;
    Ok(serde_json::to_string(&vector)?)
}
