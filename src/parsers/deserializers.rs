use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        // Unix timestamp in milliseconds
        Value::Number(n) => {
            let ms = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(ms)
        }
        Value::String(s) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    }
}

/// Deserialize a field as `T`, or `None` when it is `null` or has some other shape
///
/// Log records are read as plain JSON: a field of the wrong type is treated like a
/// missing one instead of rejecting the whole line.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Like [`lenient`], falling back to `T::default()`
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// Timestamp given as integer milliseconds or an RFC3339 string; anything else is absent
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(timestamp_from_value(&value))
}

/// Deserializer for transcript timestamps, which are kept as ISO-8601 strings
///
/// Strings pass through untouched so they still order lexically. A numeric millisecond
/// timestamp is rendered in the same `YYYY-MM-DDTHH:MM:SS.sssZ` shape Claude writes.
/// Other values are absent.
pub fn deserialize_optional_iso_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(_) => timestamp_from_value(&value)
            .map(|timestamp| timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}
