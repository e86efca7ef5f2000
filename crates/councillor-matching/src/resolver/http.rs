//! HTTP layer: status mapping for the classification service.
//!
//! This is the ONLY place for status code handling. resolver/mod.rs never
//! interprets status codes.

use crate::error::{MatchingError, MatchingResult};
use crate::types::{Category, ReportCategoryResponse};

/// HTTP backend for classifier requests (holds the reqwest client and base URL).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl HttpBackend {
    /// Single GET, no retries. 2xx/3xx parse the body; any other status is `Upstream`.
    pub(crate) async fn fetch_category(&self, url: &str) -> MatchingResult<Category> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=399 => {
                let body: ReportCategoryResponse =
                    response
                        .json()
                        .await
                        .map_err(|e| MatchingError::Transport {
                            message: format!("failed to parse category response: {}", e),
                        })?;
                Ok(body.category)
            }

            code => Err(MatchingError::Upstream {
                status: code,
                url: url.to_string(),
            }),
        }
    }
}
