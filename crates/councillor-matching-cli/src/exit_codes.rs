//! Exit codes of `councillor-match`.
//! Matching failures exit with `MatchingError::exit_code()`; these cover the rest.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // Output could not be written or serialized
