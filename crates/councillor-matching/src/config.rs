//! Matching configuration.
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `MATCHING_BASE_URL` | Classification service base URL (default: `http://localhost:8000`) |
//! | `MATCHING_TIMEOUT` | Classifier request timeout in seconds (default: transport default) |
//! | `MATCHING_REDIS_URL` | Redis ranking cache (requires the `redis` feature) |
//! | `MATCHING_CACHE_DIR` | Directory ranking cache, used when no Redis URL is set |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MatchingError, MatchingResult};

/// Where the precomputed rankings live.
///
/// There is no default backend. An in-process [`MemoryCache`](crate::MemoryCache)
/// is only reachable by injecting it into [`MatchingOrchestrator::new`](crate::MatchingOrchestrator::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum CacheConfig {
    /// One `{category}.json` file per category.
    Dir { path: PathBuf },

    /// Redis `GET category`.
    Redis { url: String },
}

/// Matching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Base URL of the classification service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Classifier request timeout in seconds. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Ranking cache backend. Must be set before building an orchestrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            cache: None,
        }
    }
}

impl MatchingConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Load config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> MatchingResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MatchingError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse config from YAML text.
    pub fn from_yaml_str(content: &str) -> MatchingResult<Self> {
        serde_yaml::from_str(content).map_err(|e| MatchingError::Config {
            message: format!("invalid matching config: {}", e),
        })
    }

    /// Override fields that are set in the environment.
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var("MATCHING_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(raw) = std::env::var("MATCHING_TIMEOUT") {
            match raw.parse() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid MATCHING_TIMEOUT"),
            }
        }
        if let Ok(url) = std::env::var("MATCHING_REDIS_URL") {
            self.cache = Some(CacheConfig::Redis { url });
        } else if let Ok(dir) = std::env::var("MATCHING_CACHE_DIR") {
            self.cache = Some(CacheConfig::Dir { path: dir.into() });
        }
        self
    }

    /// Set the classifier base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the classifier request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the cache backend.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The configured cache backend, or `Config` when none is set.
    pub fn cache_backend(&self) -> MatchingResult<&CacheConfig> {
        self.cache.as_ref().ok_or_else(|| MatchingError::Config {
            message: "no ranking cache configured (set MATCHING_CACHE_DIR or MATCHING_REDIS_URL)"
                .to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
