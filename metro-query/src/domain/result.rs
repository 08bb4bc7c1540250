//! Per-pair query outcome.

use super::StationName;

/// Travel time for one (start, end) pair.
///
/// `duration_secs` is `None` when the query failed or the service had no
/// route between the two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub start: StationName,
    pub end: StationName,
    pub duration_secs: Option<u64>,
}

impl QueryResult {
    /// Create a result for one pair.
    pub fn new(start: StationName, end: StationName, duration_secs: Option<u64>) -> Self {
        Self {
            start,
            end,
            duration_secs,
        }
    }

    /// Duration in (fractional) minutes, if present.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.duration_secs.map(|secs| secs as f64 / 60.0)
    }
}
