//! Data types shared by the resolver, the cache and the orchestrator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a report, forwarded verbatim to the classification service.
///
/// No local validation happens; the classifier is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ReportId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ReportId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ReportId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ReportId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Classification label of a report. Used verbatim as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a precomputed ranking.
///
/// Both fields are required; a missing or mistyped field fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouncillorScore {
    pub councillor_id: i64,
    pub average_value: f64,
}

impl CouncillorScore {
    pub fn new(councillor_id: i64, average_value: f64) -> Self {
        Self {
            councillor_id,
            average_value,
        }
    }
}

/// Ranking for one category, in the order the cache holds it.
pub type RankedList = Vec<CouncillorScore>;

/// A ranking split into consecutive groups.
pub type GroupedResult = Vec<Vec<CouncillorScore>>;

/// Body of `GET {base_url}/report/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReportCategoryResponse {
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_id_from_integer() {
        assert_eq!(ReportId::from(123_i64).as_str(), "123");
        assert_eq!(ReportId::from(456_u64).to_string(), "456");
    }

    #[test]
    fn test_score_serializes_with_wire_names() {
        let json = serde_json::to_value(CouncillorScore::new(1, 4.5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"councillor_id": 1, "average_value": 4.5})
        );
    }

    #[test]
    fn test_category_response_requires_category() {
        let ok: ReportCategoryResponse =
            serde_json::from_str(r#"{"category": "roads", "confidence": 0.9}"#).unwrap();
        assert_eq!(ok.category.as_str(), "roads");

        let missing = serde_json::from_str::<ReportCategoryResponse>(r#"{"label": "roads"}"#);
        assert!(missing.is_err());
    }
}
