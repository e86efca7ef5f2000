//! Pure helpers: URL building (no HTTP, no status logic).

use crate::types::ReportId;

/// Classifier endpoint for a report.
///
/// URL format: {base_url}/report/{report_id}
pub(crate) fn report_url(base_url: &str, report_id: &ReportId) -> String {
    format!("{}/report/{}", base_url, report_id)
}
