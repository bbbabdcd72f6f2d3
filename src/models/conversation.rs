use serde::{Deserialize, Serialize};

/// One line of a per-session transcript file.
///
/// Transcript files also contain non-conversation lines (snapshots, summaries,
/// system notices); every syntactically valid JSON object line parses into a
/// record, with absent fields left unset. Only `type == "user"` records feed
/// title derivation and only `type == "assistant"` records carry usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub parent_uuid: Option<String>,
    /// Epoch milliseconds parsed from a strict RFC 3339 instant; any other
    /// shape (or a missing field) is the neutral value 0.
    #[serde(
        rename = "timestamp",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_instant_millis"
    )]
    pub timestamp_ms: i64,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub is_meta: Option<bool>,
    #[serde(default)]
    pub is_sidechain: Option<bool>,
    #[serde(default)]
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// `message.content` is either a plain string (typed user text) or an ordered
/// sequence of content blocks (assistant output, tool traffic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A single block inside a content sequence. Blocks may or may not carry a
/// `type`/`text` pair; everything else a block holds is irrelevant here and
/// ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Token counts attached to assistant records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

const BLOCK_TYPE_TEXT: &str = "text";

impl MessageContent {
    /// Extract display text from a content value.
    ///
    /// Plain text is returned as-is. Block sequences are scanned from the end
    /// backward and the first block with type `"text"` and a string payload
    /// wins; blocks of any other shape are skipped. `None` means "no text",
    /// which is a normal outcome, not a failure.
    pub fn last_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text.as_str()),
            MessageContent::Blocks(blocks) => blocks.iter().rev().find_map(|block| {
                match (block.block_type.as_deref(), block.text.as_deref()) {
                    (Some(BLOCK_TYPE_TEXT), Some(text)) => Some(text),
                    _ => None,
                }
            }),
        }
    }
}
