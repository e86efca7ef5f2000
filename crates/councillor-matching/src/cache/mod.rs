//! Read-only access to the precomputed ranking cache.
//!
//! The cache is keyed by category label and holds one serialized ranking per
//! category. A separate population pipeline writes it; this crate never does.
//!
//! # Backends
//!
//! - [`MemoryCache`]: in-process map, seeded by the embedding application and
//!   injected directly; never built from configuration
//! - [`FileCache`]: `{dir}/{category}.json`
//! - `RedisCache`: `GET category` (feature `redis`)

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::CacheConfig;
use crate::error::MatchingResult;
#[cfg(not(feature = "redis"))]
use crate::error::MatchingError;

mod file;
mod keys;
mod memory;
#[cfg(feature = "redis")]
mod redis_store;

pub use file::FileCache;
pub use memory::MemoryCache;
#[cfg(feature = "redis")]
pub use redis_store::RedisCache;

/// Outcome of a single cache read. Absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Found(Vec<u8>),
    Absent,
}

/// Key-value read port for rankings.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// One read per call; backend failures are `Transport`.
    async fn get(&self, key: &str) -> MatchingResult<CacheLookup>;
}

/// Build the backend named by `config`.
pub async fn open(config: &CacheConfig) -> MatchingResult<Arc<dyn CacheStore>> {
    match config {
        CacheConfig::Dir { path } => Ok(Arc::new(FileCache::with_dir(path))),
        #[cfg(feature = "redis")]
        CacheConfig::Redis { url } => Ok(Arc::new(RedisCache::connect(url).await?)),
        #[cfg(not(feature = "redis"))]
        CacheConfig::Redis { .. } => Err(MatchingError::Config {
            message: "redis cache requires the `redis` feature".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_dir_reads_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("roads.json"), b"[]").unwrap();

        let cache = open(&CacheConfig::Dir {
            path: temp_dir.path().to_path_buf(),
        })
        .await
        .unwrap();

        assert_eq!(
            cache.get("roads").await.unwrap(),
            CacheLookup::Found(b"[]".to_vec())
        );
    }

    #[cfg(not(feature = "redis"))]
    #[tokio::test]
    async fn test_open_redis_without_feature() {
        let result = open(&CacheConfig::Redis {
            url: "redis://127.0.0.1/".to_string(),
        })
        .await;
        assert!(matches!(result, Err(MatchingError::Config { .. })));
    }
}
