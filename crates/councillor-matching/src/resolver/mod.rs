//! Category resolution for reports.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{error, info};

use crate::config::MatchingConfig;
use crate::error::{MatchingError, MatchingResult};
use crate::types::{Category, ReportId};

mod helpers;
mod http;

use helpers::report_url;
use http::HttpBackend;

pub const USER_AGENT_VALUE: &str = concat!("councillor-matching/", env!("CARGO_PKG_VERSION"));

/// Anything that can classify a report into a category.
///
/// The orchestrator depends on this seam rather than on the HTTP client.
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn resolve(&self, report_id: &ReportId) -> MatchingResult<Category>;
}

/// Classifies reports through `GET {base_url}/report/{id}`.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    http: HttpBackend,
}

impl CategoryResolver {
    /// Build a resolver with its own HTTP client.
    pub fn new(config: &MatchingConfig) -> MatchingResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| MatchingError::Config {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        Ok(Self::with_client(config.normalized_base_url(), client))
    }

    /// Build a resolver around a caller-supplied client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: HttpBackend { client, base_url },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    pub fn report_url(&self, report_id: &ReportId) -> String {
        report_url(&self.http.base_url, report_id)
    }
}

#[async_trait]
impl CategorySource for CategoryResolver {
    /// Emits exactly one event: info on success, error on failure.
    async fn resolve(&self, report_id: &ReportId) -> MatchingResult<Category> {
        let url = self.report_url(report_id);

        match self.http.fetch_category(&url).await {
            Ok(category) => {
                info!(report_id = %report_id, category = %category, "Report Category received.");
                Ok(category)
            }
            Err(err) => {
                match &err {
                    MatchingError::Upstream { status, url } => {
                        error!(
                            status = *status,
                            url = %url,
                            "Error {} occurred while getting {}",
                            status,
                            url
                        );
                    }
                    other => {
                        error!(url = %url, error = %other, "request failed while getting {}", url);
                    }
                }
                Err(err)
            }
        }
    }
}
