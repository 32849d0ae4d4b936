//! Retriever: remote-first search with deterministic local fallback.
//!
//! Stage 1: remote store, if configured. Any failure, timeout, or empty
//! result falls through.
//! Stage 2: local JSON index, query embedded at the index's dimensionality,
//! ranked by cosine.

use std::sync::Arc;

use serde::Serialize;
use sift_core::config::RetrievalConfig;
use sift_core::constants::{COMPONENT_RETRIEVAL, LOCAL_INDEX_NAME};
use sift_core::errors::{RemoteError, RetrievalError, SiftResult};
use sift_core::models::{DegradationEvent, PassageOrigin, ScoredPassage};
use sift_core::traits::IRemoteStore;
use sift_embeddings::EmbeddingChain;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::index_store::{query_dimensions, LocalIndexStore};
use crate::ranking;
use crate::remote::ChromaStore;

/// Passages from one retrieval call, with the tier that produced them and
/// any fallbacks taken.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrievalOutcome {
    pub passages: Vec<ScoredPassage>,
    /// `None` when no tier produced anything.
    pub origin: Option<PassageOrigin>,
    pub degradations: Vec<DegradationEvent>,
}

impl RetrievalOutcome {
    fn empty(degradations: Vec<DegradationEvent>) -> Self {
        Self {
            passages: Vec::new(),
            origin: None,
            degradations,
        }
    }
}

/// Shared retrieval entry point. Safe to use from many tasks at once.
pub struct Retriever {
    config: RetrievalConfig,
    index: LocalIndexStore,
    remote: Option<Arc<dyn IRemoteStore>>,
    embeddings: EmbeddingChain,
}

impl Retriever {
    /// Build a retriever from configuration. A remote client that cannot be
    /// constructed is logged and the retriever runs local-only.
    pub fn new(config: RetrievalConfig) -> Self {
        let remote: Option<Arc<dyn IRemoteStore>> = match ChromaStore::from_config(&config.remote)
        {
            Ok(Some(store)) => {
                info!(
                    url = store.base_url(),
                    collection = store.collection(),
                    "remote store enabled"
                );
                Some(Arc::new(store))
            }
            Ok(None) => {
                debug!("remote store disabled");
                None
            }
            Err(e) => {
                warn!(error = %e, "remote store unavailable, using local index only");
                None
            }
        };
        Self {
            index: LocalIndexStore::from_config(&config),
            config,
            remote,
            embeddings: EmbeddingChain::new(),
        }
    }

    /// Build a retriever that never contacts a remote store.
    pub fn local_only(config: RetrievalConfig) -> Self {
        Self {
            index: LocalIndexStore::from_config(&config),
            config,
            remote: None,
            embeddings: EmbeddingChain::new(),
        }
    }

    /// Replace the remote store.
    pub fn with_remote(mut self, remote: Arc<dyn IRemoteStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Replace the embedding chain used for local queries.
    pub fn with_embeddings(mut self, embeddings: EmbeddingChain) -> Self {
        self.embeddings = embeddings;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn index(&self) -> &LocalIndexStore {
        &self.index
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Top `k` passages for `query`, best first.
    ///
    /// Errors only on `k == 0`. Every environmental failure degrades to the
    /// next tier, and finally to an empty result.
    pub async fn retrieve(&self, query: &str, k: usize) -> SiftResult<Vec<ScoredPassage>> {
        Ok(self.retrieve_detailed(query, k).await?.passages)
    }

    /// Like [`Retriever::retrieve`], also reporting the producing tier and
    /// the fallbacks taken.
    pub async fn retrieve_detailed(&self, query: &str, k: usize) -> SiftResult<RetrievalOutcome> {
        self.retrieve_with_cancel(query, k, &CancellationToken::new())
            .await
    }

    /// Like [`Retriever::retrieve_detailed`], abandoning the call with
    /// [`RetrievalError::Cancelled`] once `cancel` fires.
    pub async fn retrieve_with_cancel(
        &self,
        query: &str,
        k: usize,
        cancel: &CancellationToken,
    ) -> SiftResult<RetrievalOutcome> {
        validate_k(k)?;
        info!(k, "retrieving passages");
        debug!(query, "retrieval query");

        let mut degradations = Vec::new();
        if let Some(remote) = &self.remote {
            let timeout = self.config.remote.timeout();
            let attempt = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(RetrievalError::Cancelled.into()),
                result = tokio::time::timeout(timeout, remote.search(query, k)) => result,
            };

            let failure = match attempt {
                Ok(Ok(mut passages)) if !passages.is_empty() => {
                    passages.truncate(k);
                    info!(
                        store = remote.name(),
                        results = passages.len(),
                        "remote retrieval succeeded"
                    );
                    return Ok(RetrievalOutcome {
                        passages,
                        origin: Some(PassageOrigin::Remote),
                        degradations,
                    });
                }
                Ok(Ok(_)) => "remote store returned no results".to_string(),
                Ok(Err(e)) => e.to_string(),
                Err(_) => RemoteError::Timeout {
                    elapsed_ms: self.config.remote.timeout_ms,
                }
                .to_string(),
            };
            warn!(
                store = remote.name(),
                failure = %failure,
                "remote retrieval failed, falling back to local index"
            );
            degradations.push(DegradationEvent::now(
                COMPONENT_RETRIEVAL,
                format!("{}: {failure}", remote.name()),
                LOCAL_INDEX_NAME,
            ));
        }

        if cancel.is_cancelled() {
            return Err(RetrievalError::Cancelled.into());
        }
        Ok(self.rank_local(query, k, degradations))
    }

    /// Local-tier retrieval only. Runs on the calling thread.
    pub fn retrieve_local(&self, query: &str, k: usize) -> SiftResult<RetrievalOutcome> {
        validate_k(k)?;
        Ok(self.rank_local(query, k, Vec::new()))
    }

    /// Blocking form of [`Retriever::retrieve`] for synchronous callers.
    ///
    /// Drives the call on a private current-thread runtime, so it must not
    /// be called from inside an async context.
    pub fn retrieve_blocking(&self, query: &str, k: usize) -> SiftResult<Vec<ScoredPassage>> {
        validate_k(k)?;
        match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(self.retrieve(query, k)),
            Err(e) => {
                warn!(error = %e, "failed to start runtime, using local index only");
                Ok(self.rank_local(query, k, Vec::new()).passages)
            }
        }
    }

    fn rank_local(
        &self,
        query: &str,
        k: usize,
        mut degradations: Vec<DegradationEvent>,
    ) -> RetrievalOutcome {
        let entries = self.index.load();
        if entries.is_empty() {
            info!(
                path = %self.index.path().display(),
                "no local documents to retrieve"
            );
            return RetrievalOutcome::empty(degradations);
        }

        let dim = query_dimensions(&entries, self.config.default_dimensions);
        let embedded = match self.embeddings.embed(query, dim) {
            Ok(embedded) => embedded,
            Err(e) => {
                warn!(dim, error = %e, "failed to embed query");
                return RetrievalOutcome::empty(degradations);
            }
        };
        degradations.extend(embedded.degradations);

        let passages = ranking::top_k(&entries, &embedded.embedding, k);
        info!(
            results = passages.len(),
            indexed = entries.len(),
            provider = %embedded.provider,
            "local retrieval complete"
        );
        RetrievalOutcome {
            origin: Some(PassageOrigin::Local),
            passages,
            degradations,
        }
    }
}

/// One-shot retrieval with a fresh [`Retriever`] built from `config`.
pub async fn retrieve(
    query: &str,
    k: usize,
    config: &RetrievalConfig,
) -> SiftResult<Vec<ScoredPassage>> {
    Retriever::new(config.clone()).retrieve(query, k).await
}

fn validate_k(k: usize) -> Result<(), RetrievalError> {
    if k == 0 {
        return Err(RetrievalError::InvalidTopK { k });
    }
    Ok(())
}
