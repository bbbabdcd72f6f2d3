//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use ai_transcript_engine::{SanitizeStrategy, sanitize_path};
use tempfile::TempDir;

/// Builder for creating synthetic `.claude` directory trees
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        let history_path = self.temp_dir.path().join("history.jsonl");
        let mut file = fs::File::create(history_path).expect("Failed to create history.jsonl");
        file.write_all(content.as_bytes()).expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add a transcript directory for a project path (alphanumeric
    /// convention) containing the given transcript files
    pub fn with_project(self, project_path: &str, transcripts: &[TranscriptFileBuilder]) -> Self {
        let sanitized = sanitize_path(project_path, SanitizeStrategy::Alphanumeric);
        let project_dir = self.temp_dir.path().join("projects").join(sanitized);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Add a conversation-detail document for a project path (separator
    /// convention) under the given subdirectory name
    pub fn with_detail_document(self, project_path: &str, subdir: &str, content: &str) -> Self {
        let sanitized = sanitize_path(project_path, SanitizeStrategy::Separators);
        let dir = self.temp_dir.path().join("projects").join(sanitized).join(subdir);
        fs::create_dir_all(&dir).expect("Failed to create detail dir");
        fs::write(dir.join("conversation.json"), content).expect("Failed to write detail doc");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    session_id: Option<String>,
    project: Option<String>,
}

impl HistoryEntryBuilder {
    pub fn new() -> Self {
        Self {
            display: "Test entry".to_string(),
            timestamp: 1234567890,
            session_id: Some("550e8400-e29b-41d4-a716-446655440000".to_string()),
            project: None,
        }
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let project_field =
            self.project.as_ref().map(|p| format!(r#","project":"{}""#, p)).unwrap_or_default();
        let session_field = self
            .session_id
            .as_ref()
            .map(|s| format!(r#","sessionId":"{}""#, s))
            .unwrap_or_default();

        format!(
            r#"{{"display":"{}","timestamp":{}{}{}}}"#,
            self.display, self.timestamp, session_field, project_field
        )
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for per-session transcript files
pub struct TranscriptFileBuilder {
    session_id: String,
    lines: Vec<String>,
}

impl TranscriptFileBuilder {
    /// Create a transcript for the given session id (the filename becomes
    /// `<session_id>.jsonl`)
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new() }
    }

    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed-line scenarios)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(format!("{}.jsonl", self.session_id));
        let mut file = fs::File::create(file_path).expect("Failed to create transcript file");
        file.write_all(self.lines.join("\n").as_bytes())
            .expect("Failed to write transcript file");
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content_json: String,
    timestamp: Option<String>,
    is_meta: Option<bool>,
    model: Option<String>,
    usage: Option<(u64, u64)>,
}

impl RecordBuilder {
    pub fn user(text: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content_json: format!(r#""{}""#, text),
            timestamp: Some("2024-01-15T10:00:00Z".to_string()),
            is_meta: None,
            model: None,
            usage: None,
        }
    }

    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content_json: format!(r#"[{{"type":"text","text":"{}"}}]"#, text),
            timestamp: Some("2024-01-15T10:00:05Z".to_string()),
            is_meta: None,
            model: None,
            usage: None,
        }
    }

    /// Replace the content value with raw JSON (string or block array)
    pub fn content_json(mut self, json: &str) -> Self {
        self.content_json = json.to_string();
        self
    }

    /// Set an RFC 3339 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Drop the timestamp field entirely
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    pub fn meta(mut self, is_meta: bool) -> Self {
        self.is_meta = Some(is_meta);
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    pub fn usage(mut self, input_tokens: u64, output_tokens: u64) -> Self {
        self.usage = Some((input_tokens, output_tokens));
        self
    }

    pub fn to_json(&self) -> String {
        let timestamp_field = self
            .timestamp
            .as_ref()
            .map(|t| format!(r#","timestamp":"{}""#, t))
            .unwrap_or_default();
        let meta_field =
            self.is_meta.map(|m| format!(r#","isMeta":{}"#, m)).unwrap_or_default();
        let model_field =
            self.model.as_ref().map(|m| format!(r#","model":"{}""#, m)).unwrap_or_default();
        let usage_field = self
            .usage
            .map(|(input, output)| {
                format!(r#","usage":{{"input_tokens":{},"output_tokens":{}}}"#, input, output)
            })
            .unwrap_or_default();

        format!(
            r#"{{"type":"{}"{}{},"message":{{"role":"{}","content":{}{}{}}}}}"#,
            self.record_type,
            timestamp_field,
            meta_field,
            self.role,
            self.content_json,
            model_field,
            usage_field
        )
    }
}
