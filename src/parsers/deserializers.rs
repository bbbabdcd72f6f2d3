use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Deserialize a history-log timestamp into epoch milliseconds.
///
/// The flat log carries integers (epoch ms); older entries carry RFC 3339
/// strings. Anything else makes the whole line malformed.
pub fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::custom("invalid timestamp")),
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map(|dt| dt.timestamp_millis())
            .map_err(|e| Error::custom(format!("invalid RFC 3339 timestamp: {}", e))),
        Value::Null => Ok(0),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Deserialize a transcript timestamp into epoch milliseconds.
///
/// Only a strict RFC 3339 instant is accepted; any other shape, a parse
/// failure, or a missing value yields the neutral timestamp 0. This is never
/// an error: an unreadable timestamp must not cost the record.
pub fn deserialize_instant_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            s.parse::<DateTime<Utc>>().map(|dt| dt.timestamp_millis()).unwrap_or(0)
        }
        _ => 0,
    })
}

/// Deserialize an optional session id with lenient UUID validation.
///
/// History-log session ids are echo-only data; a value that is not a UUID
/// degrades to `None` instead of failing the line.
pub fn deserialize_opt_session_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| Uuid::parse_str(s).is_ok()))
}
