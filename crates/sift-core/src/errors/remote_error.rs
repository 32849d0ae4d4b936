/// Remote vector store failures. The retrieval orchestrator turns every one
/// of these into "no remote results".
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote store connection failed: {reason}")]
    Connection { reason: String },

    #[error("remote store timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },

    #[error("remote store rejected credentials: HTTP {status}")]
    Unauthorized { status: u16 },

    #[error("remote store returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("collection not found: {name}")]
    CollectionNotFound { name: String },

    #[error("malformed remote response: {reason}")]
    MalformedResponse { reason: String },
}
