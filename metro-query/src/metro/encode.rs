//! Station name percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in station names: everything except ASCII
/// alphanumerics and `-._~/`.
const STATION_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a station name as UTF-8.
pub fn encode_station(name: &str) -> String {
    utf8_percent_encode(name, STATION_NAME).to_string()
}
