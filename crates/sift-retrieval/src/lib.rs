//! # sift-retrieval
//!
//! Finds the k most relevant passages for a query.
//!
//! ```text
//! Retriever
//! ├── IRemoteStore (optional, e.g. ChromaStore over HTTP)
//! │     success with results → returned as-is
//! │     disabled / failure / timeout / empty → fall through
//! └── LocalIndexStore (JSON file) + EmbeddingChain + cosine ranking
//! ```
//!
//! The two tiers are never merged within one call.

pub mod context;
pub mod engine;
pub mod index_store;
pub mod ranking;
pub mod remote;

pub use context::{render_context, ContextOptions};
pub use engine::{retrieve, RetrievalOutcome, Retriever};
pub use index_store::LocalIndexStore;
pub use remote::ChromaStore;
pub use tokio_util::sync::CancellationToken;
