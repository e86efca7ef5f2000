//! In-process ranking cache.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::MatchingResult;

use super::{CacheLookup, CacheStore};

/// Map-backed cache. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry. Matching itself only reads.
    pub async fn insert(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.entries
            .write()
            .await
            .insert(key.into(), payload.into());
    }

    pub async fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.write().await.remove(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> MatchingResult<CacheLookup> {
        match self.entries.read().await.get(key) {
            Some(payload) => {
                debug!(key, bytes = payload.len(), "cache hit");
                Ok(CacheLookup::Found(payload.clone()))
            }
            None => {
                debug!(key, "cache miss");
                Ok(CacheLookup::Absent)
            }
        }
    }
}
