//! Directory-backed ranking cache.
//!
//! # Cache Structure
//!
//! ```text
//! {cache_dir}/
//!   {category}.json   # JSON array of {councillor_id, average_value}
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{MatchingError, MatchingResult};

use super::keys::entry_path;
use super::{CacheLookup, CacheStore};

/// Reads rankings written as files by the population pipeline.
#[derive(Debug, Clone)]
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn get(&self, key: &str) -> MatchingResult<CacheLookup> {
        let path = entry_path(&self.cache_dir, key)?;

        match fs::read(&path).await {
            Ok(payload) => {
                debug!(key, bytes = payload.len(), "cache hit");
                Ok(CacheLookup::Found(payload))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "cache miss");
                Ok(CacheLookup::Absent)
            }
            Err(e) => Err(MatchingError::Transport {
                message: format!("failed to read cache entry {}: {}", path.display(), e),
            }),
        }
    }
}
