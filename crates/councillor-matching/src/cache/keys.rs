//! Key to path derivation for the directory cache.

use std::path::{Path, PathBuf};

use crate::error::{MatchingError, MatchingResult};

/// Path of the entry for `key`. Keys that would leave `cache_dir` are rejected.
pub(crate) fn entry_path(cache_dir: &Path, key: &str) -> MatchingResult<PathBuf> {
    let escapes = key.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
    if key.is_empty() || key == "." || key == ".." || escapes {
        return Err(MatchingError::Transport {
            message: format!("invalid cache key for directory cache: {:?}", key),
        });
    }

    Ok(cache_dir.join(format!("{}.json", key)))
}
