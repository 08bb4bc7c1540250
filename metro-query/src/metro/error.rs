//! Metro client error types.

/// Errors from a single travel-time query.
///
/// Callers of [`MetroClient::get_travel_time`](super::MetroClient::get_travel_time)
/// only see `None`; this type exists for logging and for
/// [`MetroClient::try_travel_time`](super::MetroClient::try_travel_time).
#[derive(Debug, thiserror::Error)]
pub enum MetroError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// `success` was false or missing
    #[error("service reported failure")]
    Unsuccessful,

    /// `result` was missing or empty
    #[error("no route found")]
    NoResult,

    /// First route had no `needTimeScope`
    #[error("route has no travel time")]
    MissingDuration,

    /// Configured header value is not valid
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}
