//! Domain error types.

/// Errors from validating a batch of station names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// No station names were given
    #[error("no stations entered")]
    Empty,

    /// Station names must come in (start, end) pairs
    #[error("{0} stations entered, the number of stations must be even")]
    OddCount(usize),
}
