use crate::errors::SiftResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text into a vector of exactly `dim` floats.
    fn embed(&self, text: &str, dim: usize) -> SiftResult<Vec<f32>>;

    /// Whether this provider can produce vectors of `dim` floats.
    fn supports_dimensions(&self, dim: usize) -> bool;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
