/// Retrieval errors visible to the caller. Only contract violations and
/// caller-initiated cancellation end up here.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("top_k must be positive, got {k}")]
    InvalidTopK { k: usize },

    #[error("retrieval cancelled by caller")]
    Cancelled,
}
