//! Redis-backed ranking cache.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::debug;

use crate::error::{MatchingError, MatchingResult};

use super::{CacheLookup, CacheStore};

/// `GET category` against the ranking Redis.
///
/// The multiplexed connection is shared by clones; each read clones the handle.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    pub async fn connect(url: &str) -> MatchingResult<Self> {
        let client = redis::Client::open(url).map_err(|e| MatchingError::Config {
            message: format!("invalid redis url: {}", e),
        })?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| MatchingError::Transport {
                message: format!("failed to connect to redis: {}", e),
            })?;

        Ok(Self { conn })
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> MatchingResult<CacheLookup> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> =
            conn.get(key)
                .await
                .map_err(|e| MatchingError::Transport {
                    message: format!("redis GET {} failed: {}", key, e),
                })?;

        match value {
            Some(payload) => {
                debug!(key, bytes = payload.len(), "cache hit");
                Ok(CacheLookup::Found(payload))
            }
            None => {
                debug!(key, "cache miss");
                Ok(CacheLookup::Absent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let err = RedisCache::connect("not a url").await.unwrap_err();
        assert!(matches!(err, MatchingError::Config { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_connect_refused_is_transport() {
        // Nothing listens on the discard port.
        let err = RedisCache::connect("redis://127.0.0.1:9/").await.unwrap_err();
        assert!(err.is_transport(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_open_redis_backend_surfaces_connect_failure() {
        let result = crate::cache::open(&crate::config::CacheConfig::Redis {
            url: "redis://127.0.0.1:9/".to_string(),
        })
        .await;
        assert!(matches!(result, Err(MatchingError::Transport { .. })));
    }
}
