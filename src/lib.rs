//! AI Transcript Engine - index and query Claude Code conversation history
//!
//! This library re-scans the transcript files under `~/.claude/` on every
//! request and produces derived views for a thin presentation shell:
//!
//! - Reconstructing chat sessions from per-project transcript files
//! - Cross-project statistics over the flat `history.jsonl` log
//! - Case-insensitive text search over history entries
//! - Token-usage and cost reporting with a per-model price table
//!
//! There is no persisted index: queries are stateless, tolerate corrupted
//! lines, and always answer with a uniform JSON envelope.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use ai_transcript_engine::{EngineConfig, QueryService};
//!
//! let service = QueryService::new(EngineConfig::from_home()?);
//! let envelope = service.handle("stats", &HashMap::new());
//! println!("{envelope}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod parsers;
pub mod query;
pub mod sessions;
pub mod stats;
pub mod usage;
pub mod utils;

// Re-export commonly used types
pub use config::EngineConfig;
pub use models::{ApiResponse, SessionInfo};
pub use query::QueryService;
pub use query::background::spawn_usage_statistics;
pub use sessions::{read_project_details, reconstruct_sessions};
pub use usage::{UsageScope, aggregate_usage, usage_report};
pub use utils::paths::{SanitizeStrategy, project_display_name, sanitize_path};
