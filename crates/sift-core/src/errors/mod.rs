//! Error taxonomy. One `thiserror` enum per subsystem.
//!
//! [`SiftError`] aggregates what a retrieval call can return. Remote and
//! index failures stay inside their tiers, which degrade instead of failing.
//! Configuration loading reports [`ConfigError`] directly.

mod config_error;
mod embedding_error;
mod index_error;
mod remote_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use remote_error::RemoteError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the sift workspace.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

pub type SiftResult<T> = Result<T, SiftError>;
