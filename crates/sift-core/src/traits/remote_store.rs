use futures::future::BoxFuture;

use crate::errors::RemoteError;
use crate::models::ScoredPassage;

/// Network-backed nearest-neighbor search.
///
/// Implementations return results best-first, in the order the store reports
/// them, with scores already mapped into `[0, 1]`. Any failure is a
/// [`RemoteError`]; the caller decides how to degrade.
pub trait IRemoteStore: Send + Sync {
    /// Human-readable store name for logs and degradation events.
    fn name(&self) -> &str;

    fn search<'a>(
        &'a self,
        query: &'a str,
        k: usize,
    ) -> BoxFuture<'a, Result<Vec<ScoredPassage>, RemoteError>>;
}
