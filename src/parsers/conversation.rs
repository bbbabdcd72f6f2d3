use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ConversationRecord;

/// Parse one per-session transcript file into records, in file order.
///
/// Each line is an independent parse unit: malformed lines are logged to
/// stderr and skipped, and the scan continues. An unreadable file is an error
/// for the caller to downgrade (a per-file failure should cost that file,
/// not the query).
pub fn parse_transcript_file(path: &Path) -> Result<Vec<ConversationRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read line from {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ConversationRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!(
                    "Warning: skipping malformed line {} in {}: {}",
                    line_num + 1,
                    path.display(),
                    e
                );
            }
        }
    }

    Ok(records)
}
