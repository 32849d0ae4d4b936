//! Remote vector store tier.

mod chroma;
pub mod protocol;

pub use chroma::ChromaStore;
