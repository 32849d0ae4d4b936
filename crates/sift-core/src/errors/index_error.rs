/// Local index errors. A missing index file is not an error.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read index {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse index {path}: {reason}")]
    Parse { path: String, reason: String },
}
