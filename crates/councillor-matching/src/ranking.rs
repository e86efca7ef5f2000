//! Decoding of cached rankings.

use crate::cache::CacheLookup;
use crate::error::{MatchingError, MatchingResult};
use crate::types::{Category, RankedList};

/// Decode a cache payload into a ranking, preserving its order.
///
/// A JSON `null` payload counts as absent and yields an empty ranking.
/// Anything else that is not an array of scores is `CacheDecode`.
pub fn decode_ranking(category: &Category, payload: &[u8]) -> MatchingResult<RankedList> {
    let decoded: Option<RankedList> =
        serde_json::from_slice(payload).map_err(|e| MatchingError::CacheDecode {
            category: category.to_string(),
            message: e.to_string(),
        })?;

    Ok(decoded.unwrap_or_default())
}

/// Turn a cache read into a ranking; `Absent` is an empty ranking.
pub fn ranking_from_lookup(
    category: &Category,
    lookup: CacheLookup,
) -> MatchingResult<RankedList> {
    match lookup {
        CacheLookup::Found(payload) => decode_ranking(category, &payload),
        CacheLookup::Absent => Ok(RankedList::new()),
    }
}
