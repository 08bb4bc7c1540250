//! Chongqing metro "TakeLine" client.
//!
//! The metro website exposes an internal endpoint that, given a start and
//! end station name, returns candidate routes with their travel time in
//! seconds (`needTimeScope`). Only the first candidate is used.

mod client;
mod encode;
mod error;
mod types;

pub use client::{BASE_URL_VAR, MetroClient, MetroConfig, TIMEOUT_VAR};
pub use encode::encode_station;
pub use error::MetroError;
pub use types::{TakeLineResponse, TakeLineRoute};
