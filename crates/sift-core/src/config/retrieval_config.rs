use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of passages returned when the caller does not ask for a count.
    pub top_k: usize,
    /// Path to the persisted JSON index.
    pub index_path: PathBuf,
    /// Keep the parsed index in memory until the file changes.
    pub cache_index: bool,
    /// Query dimensionality used when the index gives no hint.
    pub default_dimensions: usize,
    pub remote: RemoteConfig,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            index_path: PathBuf::from(defaults::DEFAULT_INDEX_PATH),
            cache_index: defaults::DEFAULT_CACHE_INDEX,
            default_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            remote: RemoteConfig::default(),
        }
    }
}

/// Remote vector store endpoint.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// `Some(true)` forces the remote path on, `Some(false)` forces it off,
    /// `None` enables it only when both host and port are set.
    pub enabled: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub auth_token: Option<String>,
    pub collection: String,
    pub scheme: String,
    /// Upper bound on a whole remote attempt.
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            host: None,
            port: None,
            auth_token: None,
            collection: defaults::DEFAULT_COLLECTION.to_string(),
            scheme: defaults::DEFAULT_REMOTE_SCHEME.to_string(),
            timeout_ms: defaults::DEFAULT_REMOTE_TIMEOUT_MS,
            connect_timeout_ms: defaults::DEFAULT_REMOTE_CONNECT_TIMEOUT_MS,
        }
    }
}

impl RemoteConfig {
    pub fn is_enabled(&self) -> bool {
        match self.enabled {
            Some(flag) => flag,
            None => self.host.is_some() && self.port.is_some(),
        }
    }

    /// Base URL of the store, or `None` when the remote path is disabled.
    pub fn base_url(&self) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let host = self
            .host
            .as_deref()
            .unwrap_or(defaults::DEFAULT_REMOTE_HOST);
        let port = self.port.unwrap_or(defaults::DEFAULT_REMOTE_PORT);
        Some(format!("{}://{host}:{port}", self.scheme))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

// The auth token stays out of logs.
impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("enabled", &self.enabled)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("collection", &self.collection)
            .field("scheme", &self.scheme)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}
