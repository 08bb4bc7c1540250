//! Domain types for metro travel-time queries.
//!
//! Station names are trimmed at construction and batches enforce an even
//! station count, so code receiving these types can pair stations without
//! further checks.

mod batch;
mod error;
mod result;
mod station;

pub use batch::Batch;
pub use error::BatchError;
pub use result::QueryResult;
pub use station::StationName;
