//! Serialization helpers for writer-facing output
//!
//! Counts are written as integer strings, matching how decimals are written.

use serde::Serializer;

/// Serialize any integer count as its decimal string
pub fn count_as_string<S: Serializer>(count: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(count)
}
