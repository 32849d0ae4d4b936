//! Fallback chain for embedding generation.
//!
//! Chain: registered providers in priority order → hash embedder.
//! Every fallback is logged and reported to the caller.

use sift_core::constants::COMPONENT_EMBEDDINGS;
use sift_core::errors::{EmbeddingError, SiftResult};
use sift_core::models::DegradationEvent;
use sift_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

use crate::providers::HashEmbedder;

/// Result of a chain embedding: the vector, who produced it, and any
/// fallbacks taken on the way.
#[derive(Debug, Clone)]
pub struct ChainEmbedding {
    pub embedding: Vec<f32>,
    pub provider: String,
    pub degradations: Vec<DegradationEvent>,
}

/// Ordered embedding providers with the hash embedder as the last resort.
///
/// Shared by concurrent queries through `&self`; degradation events are
/// returned per call instead of being accumulated.
pub struct EmbeddingChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    fallback: HashEmbedder,
}

impl Default for EmbeddingChain {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingChain {
    /// A chain containing only the hash embedder.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback: HashEmbedder::new(),
        }
    }

    /// Register a provider ahead of the hash embedder. Providers are tried
    /// in registration order.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Builder form of [`EmbeddingChain::push`].
    pub fn with_provider(mut self, provider: Box<dyn IEmbeddingProvider>) -> Self {
        self.push(provider);
        self
    }

    /// Embed `text` at exactly `dim` floats.
    ///
    /// Skips providers that are unavailable or cannot produce `dim` floats,
    /// and providers whose output has the wrong length. Fails only when
    /// `dim == 0`.
    pub fn embed(&self, text: &str, dim: usize) -> SiftResult<ChainEmbedding> {
        if dim == 0 {
            return Err(EmbeddingError::InvalidDimensions { dim }.into());
        }

        let mut degradations = Vec::new();
        for provider in &self.providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), "provider unavailable, skipping");
                continue;
            }
            if !provider.supports_dimensions(dim) {
                debug!(
                    provider = provider.name(),
                    dim, "provider cannot produce requested dimensions, skipping"
                );
                continue;
            }

            match provider.embed(text, dim) {
                Ok(embedding) if embedding.len() == dim => {
                    return Ok(ChainEmbedding {
                        embedding,
                        provider: provider.name().to_string(),
                        degradations,
                    });
                }
                Ok(embedding) => {
                    let err = EmbeddingError::DimensionMismatch {
                        expected: dim,
                        actual: embedding.len(),
                    };
                    warn!(provider = provider.name(), error = %err, "discarding embedding");
                    degradations.push(self.degradation(provider.as_ref(), &err));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embed failed, trying next in chain"
                    );
                    degradations.push(self.degradation(provider.as_ref(), &e));
                }
            }
        }

        let embedding = self.fallback.embed(text, dim)?;
        Ok(ChainEmbedding {
            embedding,
            provider: self.fallback.name().to_string(),
            degradations,
        })
    }

    /// Name of the first provider that would be tried for `dim`.
    pub fn active_provider_name(&self, dim: usize) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available() && p.supports_dimensions(dim))
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }

    /// Number of providers, counting the hash embedder.
    pub fn len(&self) -> usize {
        self.providers.len() + 1
    }

    /// Always false: the hash embedder is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn degradation(
        &self,
        provider: &dyn IEmbeddingProvider,
        failure: &dyn std::fmt::Display,
    ) -> DegradationEvent {
        DegradationEvent::now(
            COMPONENT_EMBEDDINGS,
            format!("{}: {failure}", provider.name()),
            "next provider in chain",
        )
    }
}
