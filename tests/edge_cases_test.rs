/// Edge cases: odd content shapes, timestamp quirks, scanner filters, and
/// sanitization boundaries.
mod common;

use std::fs;

use ai_transcript_engine::{
    EngineConfig, SanitizeStrategy, reconstruct_sessions, sanitize_path,
};
use common::{ClaudeDirBuilder, RecordBuilder, TranscriptFileBuilder};

const PROJECT: &str = "/Users/test/project1";

#[test]
fn test_title_extracted_from_last_text_block() {
    // Block content is scanned from the end backward; tool blocks are ignored.
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("blocks")
                .with_record(RecordBuilder::user("ignored").content_json(
                    r#"[{"type":"text","text":"early text"},{"type":"tool_result","tool_use_id":"t1","content":"raw"},{"type":"text","text":"final text"}]"#,
                ))
                .with_record(RecordBuilder::assistant("reply"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert_eq!(sessions[0].title.as_deref(), Some("final text"));
}

#[test]
fn test_user_record_with_only_tool_blocks_has_no_text() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("tool-only")
                .with_record(RecordBuilder::user("ignored").content_json(
                    r#"[{"type":"tool_result","tool_use_id":"t1","content":"raw"}]"#,
                ))
                .with_record(RecordBuilder::assistant("reply"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    // No usable text anywhere -> no title -> session excluded.
    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert!(sessions.is_empty());
}

#[test]
fn test_multiline_title_collapsed_and_trimmed() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("multiline")
                .with_record(RecordBuilder::user("ignored").content_json(
                    r#""  fix this\nand also this  ""#,
                ))
                .with_record(RecordBuilder::assistant("on it"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert_eq!(sessions[0].title.as_deref(), Some("fix this and also this"));
}

#[test]
fn test_bad_timestamp_format_is_neutral_not_fatal() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("weird-ts")
                .with_record(RecordBuilder::user("question").timestamp("yesterday at noon"))
                .with_record(RecordBuilder::assistant("answer").timestamp("2024-03-01T00:00:00Z"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].last_timestamp, 1709251200000);
}

#[test]
fn test_zero_byte_transcript_ignored() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("real")
                .with_record(RecordBuilder::user("hello"))
                .with_record(RecordBuilder::assistant("hi"))],
        )
        .build();
    // Drop an empty transcript next to the real one.
    let project_dir = claude_dir
        .path()
        .join("projects")
        .join(sanitize_path(PROJECT, SanitizeStrategy::Alphanumeric));
    fs::write(project_dir.join("empty.jsonl"), b"").unwrap();

    let config = EngineConfig::new(claude_dir.path());
    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].session_id, "real");
}

#[test]
fn test_non_transcript_files_ignored() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("real")
                .with_record(RecordBuilder::user("hello"))
                .with_record(RecordBuilder::assistant("hi"))],
        )
        .build();
    let project_dir = claude_dir
        .path()
        .join("projects")
        .join(sanitize_path(PROJECT, SanitizeStrategy::Alphanumeric));
    fs::write(project_dir.join("notes.txt"), b"not a transcript").unwrap();
    fs::write(project_dir.join("conversation.json"), b"{}").unwrap();

    let config = EngineConfig::new(claude_dir.path());
    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    assert_eq!(sessions.len(), 1);
}

#[test]
fn test_sanitization_conventions_resolve_different_directories() {
    // A path with a dot maps to different directories under the two
    // conventions; the reconstructor must use the alphanumeric one.
    let project = "/srv/my.app";
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            project,
            &[TranscriptFileBuilder::new("s1")
                .with_record(RecordBuilder::user("found me"))
                .with_record(RecordBuilder::assistant("yes"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    assert_ne!(
        sanitize_path(project, SanitizeStrategy::Alphanumeric),
        sanitize_path(project, SanitizeStrategy::Separators)
    );
    let sessions = reconstruct_sessions(&config, project).unwrap();
    assert_eq!(sessions.len(), 1);
}

#[test]
fn test_unicode_title_truncation() {
    let long = "日本語のテキスト".repeat(10); // 80 chars
    let claude_dir = ClaudeDirBuilder::new()
        .with_project(
            PROJECT,
            &[TranscriptFileBuilder::new("unicode")
                .with_record(RecordBuilder::user(&long))
                .with_record(RecordBuilder::assistant("reply"))],
        )
        .build();
    let config = EngineConfig::new(claude_dir.path());

    let sessions = reconstruct_sessions(&config, PROJECT).unwrap();
    let title = sessions[0].title.as_deref().unwrap();
    assert_eq!(title.chars().count(), 48);
    assert!(title.ends_with("..."));
}
