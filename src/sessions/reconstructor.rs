use anyhow::Result;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::models::{ConversationRecord, SessionInfo};
use crate::parsers::parse_transcript_file;
use crate::sessions::scanner::{list_transcript_files, session_id_from_path};

const RECORD_TYPE_USER: &str = "user";

/// Maximum title length in characters before truncation.
const TITLE_MAX_CHARS: usize = 45;

/// Session ids with this prefix are synthetic warm-up sessions.
const RESERVED_SESSION_PREFIX: &str = "agent-";

/// Sessions with fewer records than this carry too little signal to surface.
const MIN_SESSION_RECORDS: usize = 2;

/// Titles equal to or starting with one of these (case-insensitive) mark
/// noise sessions.
const SENTINEL_TITLES: [&str; 2] = ["warmup", "no prompt"];

/// Reconstruct the sessions of a project from its transcript files.
///
/// Each transcript file backs exactly one session, identified by its
/// filename. Files are parsed in parallel; a file that cannot be read, or
/// that yields zero valid records, is dropped. Surviving sessions are
/// filtered (reserved prefix, unusable or sentinel title, too few records)
/// and sorted by descending last-activity timestamp. Ties on last activity
/// keep the aggregation order, which is not deterministic across runs.
///
/// The result is recomputed from disk on every call: an unmodified directory
/// yields identical output.
pub fn reconstruct_sessions(
    config: &EngineConfig,
    project_path: &str,
) -> Result<Vec<SessionInfo>> {
    if project_path.is_empty() {
        return Ok(Vec::new());
    }

    let project_dir = config.project_dir(project_path);
    let files = list_transcript_files(&project_dir);

    let mut sessions: Vec<SessionInfo> = files
        .par_iter()
        .filter_map(|path| {
            let session_id = session_id_from_path(path)?;
            let records = match parse_transcript_file(path) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Warning: skipping transcript {}: {}", path.display(), e);
                    return None;
                }
            };
            build_session(session_id, &records)
        })
        .collect();

    sessions.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));
    Ok(sessions)
}

/// Summarize one session's records, or `None` when the session is empty or
/// filtered out.
fn build_session(session_id: String, records: &[ConversationRecord]) -> Option<SessionInfo> {
    if records.is_empty() {
        return None;
    }

    let title = derive_title(records);
    // Invalid timestamps parse as 0: they never raise the maximum, and they
    // must not poison the minimum either.
    let last_timestamp = records.iter().map(|r| r.timestamp_ms).max().unwrap_or(0);
    let first_timestamp =
        records.iter().map(|r| r.timestamp_ms).filter(|&ts| ts > 0).min().unwrap_or(0);

    if !is_valid_session(&session_id, title.as_deref(), records.len()) {
        return None;
    }

    Some(SessionInfo {
        session_id,
        title,
        message_count: records.len(),
        first_timestamp,
        last_timestamp,
    })
}

/// Derive the session title: the first user record that is not meta and has
/// non-empty extracted text, normalized and truncated.
fn derive_title(records: &[ConversationRecord]) -> Option<String> {
    for record in records {
        if record.record_type.as_deref() != Some(RECORD_TYPE_USER) {
            continue;
        }
        if record.is_meta.unwrap_or(false) {
            continue;
        }
        let Some(text) =
            record.message.as_ref().and_then(|m| m.content.as_ref()).and_then(|c| c.last_text())
        else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let normalized = text.replace('\n', " ").trim().to_string();
        return Some(truncate_title(&normalized));
    }
    None
}

fn truncate_title(text: &str) -> String {
    if text.chars().count() <= TITLE_MAX_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(TITLE_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}

fn is_valid_session(session_id: &str, title: Option<&str>, record_count: usize) -> bool {
    if session_id.starts_with(RESERVED_SESSION_PREFIX) {
        return false;
    }

    let Some(title) = title else {
        return false;
    };
    if title.is_empty() {
        return false;
    }

    let lower = title.to_lowercase();
    if SENTINEL_TITLES.iter().any(|sentinel| lower.starts_with(sentinel)) {
        return false;
    }

    record_count >= MIN_SESSION_RECORDS
}
