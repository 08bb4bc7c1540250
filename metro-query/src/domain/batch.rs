//! Even-length batches of station names.

use super::{BatchError, StationName};

/// An ordered list of stations read as consecutive (start, end) pairs.
///
/// The length is always even. An empty batch is allowed here; callers that
/// need at least one pair use [`Batch::from_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    stations: Vec<StationName>,
}

impl Batch {
    /// Build a batch, trimming each name.
    ///
    /// Fails with [`BatchError::OddCount`] if the names cannot be paired.
    pub fn new<S: AsRef<str>>(stations: &[S]) -> Result<Self, BatchError> {
        if !stations.len().is_multiple_of(2) {
            return Err(BatchError::OddCount(stations.len()));
        }

        Ok(Self {
            stations: stations.iter().map(StationName::new).collect(),
        })
    }

    /// Build a batch from user input, additionally rejecting empty input.
    pub fn from_input<S: AsRef<str>>(stations: &[S]) -> Result<Self, BatchError> {
        if stations.is_empty() {
            return Err(BatchError::Empty);
        }
        Self::new(stations)
    }

    /// Number of (start, end) pairs.
    pub fn pair_count(&self) -> usize {
        self.stations.len() / 2
    }

    /// Whether the batch holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate the (start, end) pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&StationName, &StationName)> {
        self.stations
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
    }
}
