//! JSONL parsers for the flat history log and per-session transcript files.
//!
//! # Error Handling Strategy
//!
//! Both parsers follow a **graceful degradation** approach:
//!
//! - **Individual line failures**: Malformed JSON lines are logged to stderr
//!   and skipped, allowing parsing to continue. A single bad line never aborts
//!   a file, and partial corruption never surfaces as an aggregate error.
//!
//! - **Transient absence**: A missing history file is a normal "no history
//!   yet" state and yields an empty result, not an error.
//!
//! - **Error propagation**: I/O failures on files that do exist propagate via
//!   `anyhow::Result` with context; callers decide whether a failed file is
//!   fatal for their query (it usually is not).
//!
//! Field-level tolerance (timestamps, session ids) lives in the custom
//! deserializers module rather than in the line loop.

pub mod conversation;
pub mod deserializers;
pub mod history;

pub use conversation::parse_transcript_file;
pub use history::parse_history_file;
