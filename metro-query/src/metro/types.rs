//! TakeLine response DTOs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::MetroError;

/// Top-level response from the TakeLine endpoint.
///
/// Only the fields we read are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TakeLineResponse {
    /// Any JSON value; read with truthiness, so `1` counts as success.
    #[serde(default)]
    pub success: Option<Value>,

    #[serde(default)]
    pub result: Option<Vec<TakeLineRoute>>,
}

/// One candidate route between the two stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeLineRoute {
    /// Travel time in seconds.
    ///
    /// Integer-valued floats (`180.0`) and numeric strings (`"180"`) are
    /// accepted; anything else reads as absent.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub need_time_scope: Option<u64>,
}

impl TakeLineResponse {
    /// Travel time of the first route.
    pub fn travel_time(&self) -> Result<u64, MetroError> {
        if !self.success.as_ref().is_some_and(is_truthy) {
            return Err(MetroError::Unsuccessful);
        }

        let route = self
            .result
            .as_deref()
            .and_then(<[TakeLineRoute]>::first)
            .ok_or(MetroError::NoResult)?;

        route.need_time_scope.ok_or(MetroError::MissingDuration)
    }
}

/// JSON truthiness: `null`, `false`, zero, `""`, `[]` and `{}` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
