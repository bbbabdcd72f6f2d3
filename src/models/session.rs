use serde::{Deserialize, Serialize};

use crate::models::HistoryEntry;

/// Reconstructed session summary. Built fresh on every query and discarded
/// after the response is sent; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    /// Derived summary; `None` means the session had no usable content.
    pub title: Option<String>,
    pub message_count: usize,
    pub first_timestamp: i64,
    pub last_timestamp: i64,
}

/// Per-project aggregate keyed by project path, built transiently from the
/// flat history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub path: String,
    pub name: String,
    pub count: u64,
    pub last_access: i64,
    pub messages: Vec<HistoryEntry>,
}
