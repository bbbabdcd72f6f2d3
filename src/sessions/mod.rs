//! Session reconstruction from per-project transcript files.
//!
//! # Error Handling Strategy
//!
//! Reconstruction combines graceful degradation at every level:
//!
//! - **Missing project directory**: a normal "no history yet" state, yielding
//!   an empty session list rather than an error.
//!
//! - **File-level failures**: a transcript that cannot be read is logged and
//!   skipped; the remaining files still produce sessions.
//!
//! - **Line-level failures**: delegated to the parsers, which skip malformed
//!   lines. A file with zero valid records is dropped entirely rather than
//!   surfacing as an empty session.
//!
//! Partial data is always preferred over failing the whole query.

pub mod details;
pub mod reconstructor;
pub mod scanner;

pub use details::read_project_details;
pub use reconstructor::reconstruct_sessions;
pub use scanner::{list_transcript_files, session_id_from_path};
