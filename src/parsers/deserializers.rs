use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient deserializer for message fields that are expected to be strings.
///
/// Accepts any JSON value: strings pass through, everything else (numbers,
/// booleans, null, nested structures) is read as the empty string - the same
/// treatment an absent field gets via `#[serde(default)]`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
