use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use serde_json::{Value, json};
use walkdir::WalkDir;

use crate::config::EngineConfig;

const DETAIL_DOCUMENT: &str = "conversation.json";

/// Read the legacy per-conversation detail documents for a project.
///
/// Each subdirectory of the project's detail directory may hold one
/// `conversation.json`. The document's internal shape is not interpreted
/// here: it is parsed and passed through opaquely, with the subdirectory name
/// as id and the file's mtime (epoch millis) as timestamp. Unreadable
/// documents are logged and skipped. A missing directory yields
/// `exists: false` with no conversations, never an error.
pub fn read_project_details(config: &EngineConfig, project_path: &str) -> Value {
    let mut conversations: Vec<Value> = Vec::new();
    let mut exists = false;

    if !project_path.is_empty() {
        let details_dir = config.project_details_dir(project_path);
        if details_dir.is_dir() {
            exists = true;
            for entry in WalkDir::new(&details_dir)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_dir())
            {
                let document = entry.path().join(DETAIL_DOCUMENT);
                if !document.is_file() {
                    continue;
                }
                match read_detail_document(&document) {
                    Some(data) => {
                        let id = entry.file_name().to_string_lossy().into_owned();
                        conversations.push(json!({
                            "id": id,
                            "data": data,
                            "timestamp": modified_millis(&document),
                        }));
                    }
                    None => continue,
                }
            }
        }
    }

    json!({
        "path": project_path,
        "exists": exists,
        "conversations": conversations,
    })
}

fn read_detail_document(path: &Path) -> Option<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: failed to read detail document {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("Warning: failed to parse detail document {}: {}", path.display(), e);
            None
        }
    }
}

fn modified_millis(path: &Path) -> i64 {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
