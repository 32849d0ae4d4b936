//! Embedding providers.

mod hash_embedder;

pub use hash_embedder::HashEmbedder;
