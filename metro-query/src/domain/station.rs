//! Station name type.

use std::fmt;

/// A metro station display name, trimmed of surrounding whitespace.
///
/// No check is made that the station exists; the remote service is the
/// only authority on that.
///
/// # Examples
///
/// ```
/// use metro_query::domain::StationName;
///
/// let name = StationName::new("  沙坪坝 ");
/// assert_eq!(name.as_str(), "沙坪坝");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Create a station name, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
