//! Metro travel-time batch query.
//!
//! Looks up travel times between pairs of Chongqing metro stations using
//! the metro website's route endpoint, one request per pair.

pub mod batch;
pub mod cli;
pub mod domain;
pub mod input;
pub mod metro;
pub mod report;
