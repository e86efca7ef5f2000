//! Splitting a ranking into fixed-size groups.

use crate::error::{MatchingError, MatchingResult};
use crate::types::{CouncillorScore, GroupedResult};

/// Reject group sizes that cannot partition anything.
pub fn validate_group_size(group_size: usize) -> MatchingResult<()> {
    if group_size == 0 {
        return Err(MatchingError::InvalidArgument {
            message: "group size must be a positive integer, got 0".to_string(),
        });
    }
    Ok(())
}

/// Consecutive groups of `group_size`, the last one holding any remainder.
///
/// Concatenating the groups reproduces `ranking` exactly.
pub fn partition(ranking: &[CouncillorScore], group_size: usize) -> MatchingResult<GroupedResult> {
    validate_group_size(group_size)?;
    Ok(ranking.chunks(group_size).map(<[_]>::to_vec).collect())
}
