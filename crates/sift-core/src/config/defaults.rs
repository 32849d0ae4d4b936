// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_INDEX_PATH: &str = ".sift_index.json";
pub const DEFAULT_CACHE_INDEX: bool = false;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 128;

// --- Remote store ---
pub const DEFAULT_REMOTE_HOST: &str = "localhost";
pub const DEFAULT_REMOTE_PORT: u16 = 8000;
pub const DEFAULT_REMOTE_SCHEME: &str = "http";
pub const DEFAULT_COLLECTION: &str = "sift";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_REMOTE_CONNECT_TIMEOUT_MS: u64 = 2_000;

// --- Scoring ---
pub const DEFAULT_ALPHA: f64 = 0.40;
pub const DEFAULT_BETA: f64 = 0.25;
pub const DEFAULT_GAMMA: f64 = 0.20;
pub const DEFAULT_DELTA: f64 = 0.15;
pub const DEFAULT_FAITHFULNESS_EPSILON: f64 = 1e-6;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "sift=info";
