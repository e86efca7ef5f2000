//! Report to councillor-group matching.
//!
//! One call is one independent transaction:
//! 1. Validate the group size
//! 2. Resolve the report's category
//! 3. Read the category's ranking from the cache
//! 4. Partition the ranking into groups
//!
//! Failures from any step reach the caller unchanged. Nothing is retried or
//! memoized between calls.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{self, CacheStore};
use crate::config::MatchingConfig;
use crate::error::MatchingResult;
use crate::partition::{partition, validate_group_size};
use crate::ranking::ranking_from_lookup;
use crate::resolver::{CategoryResolver, CategorySource};
use crate::types::{GroupedResult, ReportId};

/// Matches reports to grouped councillor rankings.
#[derive(Clone)]
pub struct MatchingOrchestrator {
    resolver: Arc<dyn CategorySource>,
    cache: Arc<dyn CacheStore>,
}

impl MatchingOrchestrator {
    /// Create an orchestrator from its collaborators.
    pub fn new(resolver: Arc<dyn CategorySource>, cache: Arc<dyn CacheStore>) -> Self {
        Self { resolver, cache }
    }

    /// Build the HTTP resolver and cache backend named by `config`.
    ///
    /// Fails with `Config` when no cache backend is configured.
    pub async fn from_config(config: &MatchingConfig) -> MatchingResult<Self> {
        let backend = config.cache_backend()?;
        let resolver = CategoryResolver::new(config)?;
        let cache = cache::open(backend).await?;
        Ok(Self::new(Arc::new(resolver), cache))
    }

    /// Grouped ranking for the report's category.
    ///
    /// Returns no groups when the category has no cached ranking or an empty one.
    pub async fn match_report(
        &self,
        report_id: &ReportId,
        group_size: usize,
    ) -> MatchingResult<GroupedResult> {
        validate_group_size(group_size)?;

        let category = self.resolver.resolve(report_id).await?;
        let lookup = self.cache.get(category.as_str()).await?;
        let ranking = ranking_from_lookup(&category, lookup)?;

        debug!(
            report_id = %report_id,
            category = %category,
            councillors = ranking.len(),
            group_size,
            "partitioning cached ranking"
        );

        partition(&ranking, group_size)
    }
}

impl std::fmt::Debug for MatchingOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingOrchestrator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::cache::{CacheLookup, MemoryCache};
    use crate::error::MatchingError;
    use crate::types::{Category, CouncillorScore};

    struct FixedSource(Category);

    #[async_trait]
    impl CategorySource for FixedSource {
        async fn resolve(&self, _report_id: &ReportId) -> MatchingResult<Category> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CategorySource for FailingSource {
        async fn resolve(&self, _report_id: &ReportId) -> MatchingResult<Category> {
            Err(MatchingError::Transport {
                message: "Error getting category".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct CountingCache {
        inner: MemoryCache,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl CacheStore for CountingCache {
        async fn get(&self, key: &str) -> MatchingResult<CacheLookup> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key).await
        }
    }

    const CAT_A: &str = r#"[{"councillor_id": 1, "average_value": 4.5}, {"councillor_id": 2, "average_value": 4.2}]"#;

    async fn orchestrator_with(payload: Option<&str>) -> (MatchingOrchestrator, Arc<CountingCache>) {
        let cache = Arc::new(CountingCache::default());
        if let Some(payload) = payload {
            cache.inner.insert("cat_A", payload).await;
        }
        let orchestrator = MatchingOrchestrator::new(
            Arc::new(FixedSource(Category::new("cat_A"))),
            cache.clone(),
        );
        (orchestrator, cache)
    }

    #[tokio::test]
    async fn test_single_group() {
        let (orchestrator, cache) = orchestrator_with(Some(CAT_A)).await;

        let groups = orchestrator
            .match_report(&ReportId::from(12345_i64), 2)
            .await
            .unwrap();

        assert_eq!(
            groups,
            vec![vec![
                CouncillorScore::new(1, 4.5),
                CouncillorScore::new(2, 4.2)
            ]]
        );
        assert_eq!(cache.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_singleton_groups() {
        let (orchestrator, _cache) = orchestrator_with(Some(CAT_A)).await;

        let groups = orchestrator
            .match_report(&ReportId::from(12345_i64), 1)
            .await
            .unwrap();

        assert_eq!(
            groups,
            vec![
                vec![CouncillorScore::new(1, 4.5)],
                vec![CouncillorScore::new(2, 4.2)]
            ]
        );
    }

    #[tokio::test]
    async fn test_absent_and_empty_rankings_yield_no_groups() {
        for payload in [None, Some("[]"), Some("null")] {
            let (orchestrator, cache) = orchestrator_with(payload).await;
            let groups = orchestrator
                .match_report(&ReportId::from(12345_i64), 2)
                .await
                .unwrap();
            assert!(groups.is_empty(), "payload {:?}", payload);
            assert_eq!(cache.reads.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_malformed_ranking_is_decode_error() {
        let (orchestrator, _cache) = orchestrator_with(Some("{\"oops\": true}")).await;

        let err = orchestrator
            .match_report(&ReportId::from(1_i64), 2)
            .await
            .unwrap_err();

        assert!(matches!(err, MatchingError::CacheDecode { ref category, .. } if category == "cat_A"));
    }

    #[tokio::test]
    async fn test_resolver_failure_skips_cache() {
        let cache = Arc::new(CountingCache::default());
        let orchestrator = MatchingOrchestrator::new(Arc::new(FailingSource), cache.clone());

        let err = orchestrator
            .match_report(&ReportId::from(456_i64), 10)
            .await
            .unwrap_err();

        match err {
            MatchingError::Transport { message } => assert_eq!(message, "Error getting category"),
            other => panic!("expected resolver error unchanged, got {:?}", other),
        }
        assert_eq!(cache.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_from_config_requires_cache_backend() {
        let config = MatchingConfig::default().with_base_url("http://127.0.0.1:9");

        let err = MatchingOrchestrator::from_config(&config).await.unwrap_err();

        assert!(matches!(err, MatchingError::Config { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_zero_group_size_checked_before_io() {
        let cache = Arc::new(CountingCache::default());
        let orchestrator = MatchingOrchestrator::new(Arc::new(FailingSource), cache.clone());

        let err = orchestrator
            .match_report(&ReportId::from(1_i64), 0)
            .await
            .unwrap_err();

        assert!(matches!(err, MatchingError::InvalidArgument { .. }));
        assert_eq!(cache.reads.load(Ordering::SeqCst), 0);
    }
}
