use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of the flat global history log (`history.jsonl`).
///
/// Immutable once parsed. Timestamps are epoch milliseconds; the log also
/// contains entries with RFC 3339 string timestamps, which the deserializer
/// normalizes. Pasted-content attachments are carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasted_contents: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_epoch_millis"
    )]
    pub timestamp: i64,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_opt_session_id"
    )]
    pub session_id: Option<String>,
}
