/// Project config file looked up in the working root.
pub const CONFIG_FILENAME: &str = "sift.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Component names used in degradation events and log fields.
pub const COMPONENT_RETRIEVAL: &str = "retrieval";
pub const COMPONENT_EMBEDDINGS: &str = "embeddings";

/// Name reported for the local index tier.
pub const LOCAL_INDEX_NAME: &str = "local-index";
