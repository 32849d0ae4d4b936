//! Content-addressed fallback embeddings.
//!
//! The SHA-256 digest of the UTF-8 text is repeated to `dim` bytes and each
//! byte is mapped linearly from `[0, 255]` to `[-1, 1]`. No model, no
//! network. The vectors carry no semantics beyond identity: equal text gives
//! equal vectors across runs and machines, which is what the persisted index
//! relies on.

use sha2::{Digest, Sha256};
use sift_core::errors::{EmbeddingError, SiftResult};
use sift_core::traits::IEmbeddingProvider;

/// Deterministic hash-based embedding provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn new() -> Self {
        Self
    }

    /// Produce the vector for `text`. Infallible for `dim > 0`; an empty
    /// vector for `dim == 0`.
    pub fn vector(text: &str, dim: usize) -> Vec<f32> {
        let digest = Sha256::digest(text.as_bytes());
        digest
            .iter()
            .cycle()
            .take(dim)
            .map(|&b| (f32::from(b) / 255.0) * 2.0 - 1.0)
            .collect()
    }
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str, dim: usize) -> SiftResult<Vec<f32>> {
        if dim == 0 {
            return Err(EmbeddingError::InvalidDimensions { dim }.into());
        }
        Ok(Self::vector(text, dim))
    }

    fn supports_dimensions(&self, dim: usize) -> bool {
        dim > 0
    }

    fn name(&self) -> &str {
        "sha256-hash"
    }

    fn is_available(&self) -> bool {
        true
    }
}
