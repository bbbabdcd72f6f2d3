use serde::Serialize;
use serde_json::{Map, Value};

/// Uniform response envelope. Every query result reaching the presentation
/// layer is one of these: `success` plus a payload, or `success: false` plus
/// an error message. The payload is opaque to the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl ApiResponse {
    pub fn success(data: Value) -> Self {
        Self { success: true, error: None, data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()), data: Value::Null }
    }

    /// Render the envelope as a JSON object. Built by hand so that shaping a
    /// response can never itself fail.
    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        map.insert("success".to_string(), Value::Bool(self.success));
        if let Some(error) = self.error {
            map.insert("error".to_string(), Value::String(error));
        }
        if !self.data.is_null() {
            map.insert("data".to_string(), self.data);
        }
        Value::Object(map)
    }
}
