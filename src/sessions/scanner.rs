use std::fs;
use std::path::{Path, PathBuf};

/// Filename suffix of per-session transcript files.
pub const TRANSCRIPT_SUFFIX: &str = ".jsonl";

/// List candidate transcript files directly under a project directory.
///
/// Immediate children only (no recursion), `.jsonl` suffix required,
/// zero-byte files excluded. A missing or unreadable directory is the normal
/// "no history yet" state and yields an empty list, never an error.
pub fn list_transcript_files(project_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(project_dir) else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(TRANSCRIPT_SUFFIX) {
            continue;
        }
        match entry.metadata() {
            Ok(meta) if meta.is_file() && meta.len() > 0 => files.push(path),
            _ => {}
        }
    }
    files
}

/// Derive the session id from a transcript filename by stripping the suffix.
pub fn session_id_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(TRANSCRIPT_SUFFIX))
        .map(str::to_owned)
}
