//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize human-readable logging.
///
/// Reads `SIFT_LOG` for per-target levels, e.g.
/// `SIFT_LOG=sift_retrieval=debug,sift_embeddings=warn`.
/// Falls back to `sift=info` if unset or invalid.
///
/// Idempotent; only the first call of either init function takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter())
            .init();
    });
}

/// Initialize structured JSON logging, for running behind a log collector.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter())
            .init();
    });
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
