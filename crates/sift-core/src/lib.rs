//! # sift-core
//!
//! Foundation crate for the sift retrieval engine.
//! Defines the data model, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{IndexEntry, PassageOrigin, ScoredPassage};
