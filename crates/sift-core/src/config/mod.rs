//! Configuration with layered resolution.

pub mod defaults;
mod retrieval_config;
mod scoring_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use retrieval_config::{RemoteConfig, RetrievalConfig};
pub use scoring_config::ScoringConfig;

use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIFT_*`, then the legacy `CHROMA_*` names)
/// 2. Project config (`sift.toml` in the root, or an explicit file)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub retrieval: RetrievalConfig,
    pub scoring: ScoringConfig,
}

/// Environment keys, preferred name first.
const ENV_REMOTE_HOST: &[&str] = &["SIFT_REMOTE_HOST", "CHROMA_SERVER_IP"];
const ENV_REMOTE_PORT: &[&str] = &["SIFT_REMOTE_PORT", "CHROMA_SERVER_PORT"];
const ENV_REMOTE_TOKEN: &[&str] = &["SIFT_REMOTE_TOKEN", "CHROMA_AUTH_TOKEN"];
const ENV_REMOTE_ENABLED: &[&str] = &["SIFT_REMOTE_ENABLED", "ENABLE_CHROMA"];
const ENV_COLLECTION: &[&str] = &["SIFT_COLLECTION", "COLLECTION_NAME"];
const ENV_REMOTE_TIMEOUT_MS: &[&str] = &["SIFT_REMOTE_TIMEOUT_MS"];
const ENV_INDEX_PATH: &[&str] = &["SIFT_INDEX_PATH"];
const ENV_TOP_K: &[&str] = &["SIFT_TOP_K"];

impl SiftConfig {
    /// Load configuration for a project root: defaults, then `sift.toml` in
    /// `root` if present, then environment overrides, then validation.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            debug!(path = %project_config_path.display(), "loading project config");
            Self::read_toml_file(&project_config_path)?
        } else {
            debug!(root = %root.display(), "no project config, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file. Unlike [`SiftConfig::load`], the file
    /// must exist.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_toml_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn read_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary lookup. Empty values are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| -> Option<(String, String)> {
            keys.iter().find_map(|key| {
                lookup(key)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .map(|v| (key.to_string(), v))
            })
        };

        let remote = &mut self.retrieval.remote;
        if let Some((_, host)) = get(ENV_REMOTE_HOST) {
            remote.host = Some(host);
        }
        if let Some((key, port)) = get(ENV_REMOTE_PORT) {
            remote.port = Some(parse_value(&key, &port)?);
        }
        if let Some((_, token)) = get(ENV_REMOTE_TOKEN) {
            remote.auth_token = Some(token);
        }
        if let Some((key, flag)) = get(ENV_REMOTE_ENABLED) {
            remote.enabled = Some(parse_flag(&key, &flag)?);
        }
        if let Some((_, collection)) = get(ENV_COLLECTION) {
            remote.collection = collection;
        }
        if let Some((key, timeout)) = get(ENV_REMOTE_TIMEOUT_MS) {
            remote.timeout_ms = parse_value(&key, &timeout)?;
        }
        if let Some((_, path)) = get(ENV_INDEX_PATH) {
            self.retrieval.index_path = PathBuf::from(path);
        }
        if let Some((key, k)) = get(ENV_TOP_K) {
            self.retrieval.top_k = parse_value(&key, &k)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let retrieval = &self.retrieval;
        if retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be greater than 0"));
        }
        if retrieval.default_dimensions == 0 {
            return Err(invalid(
                "retrieval.default_dimensions",
                "must be greater than 0",
            ));
        }
        if retrieval.remote.timeout_ms == 0 {
            return Err(invalid(
                "retrieval.remote.timeout_ms",
                "must be greater than 0",
            ));
        }
        if retrieval.remote.collection.trim().is_empty() {
            return Err(invalid("retrieval.remote.collection", "must not be empty"));
        }
        if !matches!(retrieval.remote.scheme.as_str(), "http" | "https") {
            return Err(invalid(
                "retrieval.remote.scheme",
                "must be \"http\" or \"https\"",
            ));
        }

        let w = &self.scoring.weights;
        for (field, value) in [
            ("scoring.weights.alpha", w.alpha),
            ("scoring.weights.beta", w.beta),
            ("scoring.weights.gamma", w.gamma),
            ("scoring.weights.delta", w.delta),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        let eps = self.scoring.faithfulness_epsilon;
        if !eps.is_finite() || eps < 0.0 {
            return Err(invalid(
                "scoring.faithfulness_epsilon",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("{raw:?} is not a boolean flag"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn preferred_env_name_wins_over_legacy() {
        let mut config = SiftConfig::default();
        config
            .apply_env_overrides_from(lookup(&[
                ("SIFT_REMOTE_HOST", "vectors.internal"),
                ("CHROMA_SERVER_IP", "10.0.0.9"),
            ]))
            .unwrap();
        assert_eq!(
            config.retrieval.remote.host.as_deref(),
            Some("vectors.internal")
        );
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = SiftConfig::default();
        config
            .apply_env_overrides_from(lookup(&[("SIFT_COLLECTION", "  ")]))
            .unwrap();
        assert_eq!(config.retrieval.remote.collection, "sift");
    }

    #[test]
    fn bad_port_is_invalid_value() {
        let mut config = SiftConfig::default();
        let err = config
            .apply_env_overrides_from(lookup(&[("CHROMA_SERVER_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "CHROMA_SERVER_PORT"));
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("X", "YES").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
