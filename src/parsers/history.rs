use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::HistoryEntry;

/// Parse the flat history log into entries, in file order.
///
/// A missing file is the normal "no history yet" state and yields an empty
/// list. Malformed lines are logged and skipped; partial corruption never
/// fails the whole log.
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from history file")?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HistoryEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                eprintln!("Warning: skipping malformed history line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(entries)
}
