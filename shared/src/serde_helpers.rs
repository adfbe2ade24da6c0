//! Lenient number deserializers
//!
//! Browser forms and some older servers send numbers as strings. These
//! helpers accept either representation instead of rejecting the payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `Option<i64>` from a number, a numeric string, null or garbage (→ `None`)
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

/// `u64` count from a number or numeric string; anything else reads as 0
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_i64)
        .map(|n| n.max(0) as u64)
        .unwrap_or(0))
}

/// `Option<u32>` page number; zero, negative or unparsable values read as `None`
pub fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_i64)
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok()))
}
