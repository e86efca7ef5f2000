//! CLI command: councillor-match match
//!
//! Usage:
//!   councillor-match match --report-id <ID> --group-size <N> [--format text|json]
//!
//! Examples:
//!   councillor-match match --report-id 123 --group-size 5 --cache-dir /srv/rankings
//!   MATCHING_REDIS_URL=redis://cache/ councillor-match match --report-id 123 --group-size 3 --format json

use anyhow::{Context, Result};
use councillor_matching::{
    validate_group_size, GroupedResult, MatchingError, MatchingOrchestrator, MatchingResult,
    ReportId,
};
use tracing::info;

use super::{MatchArgs, OutputFormat};
use crate::exit_codes::SUCCESS;

pub async fn run(args: MatchArgs) -> Result<i32> {
    let groups = match execute(&args).await {
        Ok(groups) => groups,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.exit_code());
        }
    };

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&groups).context("failed to serialize groups")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&groups)),
    }
    Ok(SUCCESS)
}

async fn execute(args: &MatchArgs) -> MatchingResult<GroupedResult> {
    let group_size = group_size_from_arg(args.group_size)?;
    let config = args.config.resolve()?;
    let orchestrator = MatchingOrchestrator::from_config(&config).await?;

    let report_id = ReportId::new(args.report_id.clone());
    let groups = orchestrator.match_report(&report_id, group_size).await?;

    info!(report_id = %report_id, groups = groups.len(), "matching complete");
    Ok(groups)
}

/// Negative sizes cannot reach the library's `usize` API; reject them here.
fn group_size_from_arg(raw: i64) -> MatchingResult<usize> {
    let size = usize::try_from(raw).map_err(|_| MatchingError::InvalidArgument {
        message: format!("group size must be a positive integer, got {}", raw),
    })?;
    validate_group_size(size)?;
    Ok(size)
}

fn render_text(groups: &GroupedResult) -> String {
    if groups.is_empty() {
        return "no councillors ranked for this report's category\n".to_string();
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        out.push_str(&format!("group {}:\n", i + 1));
        for score in group {
            out.push_str(&format!(
                "  councillor {:>6}  {:.2}\n",
                score.councillor_id, score.average_value
            ));
        }
    }
    out
}
