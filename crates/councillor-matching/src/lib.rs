//! Report to councillor matching.
//!
//! Given a report, this crate returns the precomputed councillor ranking for
//! the report's category, split into groups of a requested size:
//!
//! - HTTP resolution of a report to its category (`GET {base_url}/report/{id}`)
//! - Read-only lookup of the category's ranking in a cache
//! - Order-preserving partitioning of the ranking into groups
//!
//! Ranking and cache population happen elsewhere; this crate only reads.
//!
//! # Quick Start
//!
//! ```no_run
//! use councillor_matching::{MatchingConfig, MatchingOrchestrator, ReportId};
//!
//! # async fn example() -> Result<(), councillor_matching::MatchingError> {
//! let orchestrator = MatchingOrchestrator::from_config(&MatchingConfig::from_env()).await?;
//!
//! let groups = orchestrator.match_report(&ReportId::from(123_i64), 5).await?;
//! for (i, group) in groups.iter().enumerate() {
//!     println!("group {}: {} councillors", i, group.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `MATCHING_BASE_URL` | Classification service base URL (default: `http://localhost:8000`) |
//! | `MATCHING_TIMEOUT` | Classifier request timeout in seconds |
//! | `MATCHING_REDIS_URL` | Redis ranking cache (feature `redis`) |
//! | `MATCHING_CACHE_DIR` | Directory ranking cache |

pub mod cache;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod partition;
pub mod ranking;
pub mod resolver;
pub mod types;

// Re-export main types
pub use cache::{CacheLookup, CacheStore, FileCache, MemoryCache};
#[cfg(feature = "redis")]
pub use cache::RedisCache;
pub use config::{CacheConfig, MatchingConfig};
pub use error::{MatchingError, MatchingResult};
pub use orchestrator::MatchingOrchestrator;
pub use partition::{partition, validate_group_size};
pub use ranking::{decode_ranking, ranking_from_lookup};
pub use resolver::{CategoryResolver, CategorySource, USER_AGENT_VALUE};
pub use types::{Category, CouncillorScore, GroupedResult, RankedList, ReportId};
