//! # sift-embeddings
//!
//! Embedding generation and vector similarity.
//!
//! ```text
//! EmbeddingChain (provider fallback)
//! ├── learned providers (optional, registered by the host)
//! └── HashEmbedder (always available, any dimensionality)
//! ```

pub mod chain;
pub mod providers;
pub mod similarity;

pub use chain::{ChainEmbedding, EmbeddingChain};
pub use providers::HashEmbedder;
pub use similarity::cosine_similarity;
