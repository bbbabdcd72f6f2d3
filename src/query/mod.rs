//! Named-query dispatch for the presentation layer.
//!
//! # Error Handling Strategy
//!
//! The query service is the error boundary of the engine. Internally
//! everything propagates `anyhow::Result`; here every failure is caught,
//! logged to stderr, and converted into the error envelope. The caller always
//! receives a well-formed JSON object with a `success` flag and never a
//! transport-level fault for data-layer problems. Partial data (sessions with
//! some unparsable lines) is preferred over failing a whole query.

pub mod background;

use std::collections::HashMap;

use anyhow::Result;
use serde_json::{Value, json};

use crate::config::EngineConfig;
use crate::models::{ApiResponse, HistoryEntry};
use crate::parsers::parse_history_file;
use crate::sessions::reconstruct_sessions;
use crate::stats::{compute_statistics, group_projects};

/// History entries returned by the `history` endpoint are capped to keep the
/// payload bounded; totals still cover the full log.
const HISTORY_PAYLOAD_CAP: usize = 200;

/// Search results are capped; matches keep their original relative order.
const SEARCH_RESULT_CAP: usize = 100;

/// Single entry point for named queries. Stateless across calls: every query
/// re-scans the relevant files and builds its derived structures fresh.
pub struct QueryService {
    config: EngineConfig,
}

impl QueryService {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Dispatch a named query. The endpoint table is fixed and
    /// case-sensitive; anything else is a structured "unknown endpoint"
    /// error, and any internal failure becomes an error envelope.
    pub fn handle(&self, endpoint: &str, params: &HashMap<String, String>) -> Value {
        let result = match endpoint {
            "history" => self.history_overview(),
            "stats" => self.global_statistics(),
            "search" => self.search(params.get("q").map(String::as_str).unwrap_or("")),
            "project" => {
                self.project_sessions(params.get("path").map(String::as_str).unwrap_or(""))
            }
            _ => {
                return ApiResponse::error(format!("Unknown endpoint: {}", endpoint)).into_value();
            }
        };

        result.unwrap_or_else(|e| {
            eprintln!("Warning: query '{}' failed: {:#}", endpoint, e);
            ApiResponse::error(format!("{:#}", e)).into_value()
        })
    }

    /// Reload the flat log, newest first.
    fn reload_history(&self) -> Result<Vec<HistoryEntry>> {
        let mut history = parse_history_file(&self.config.history_file())?;
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }

    fn history_overview(&self) -> Result<Value> {
        let history = self.reload_history()?;
        let projects = group_projects(&history);
        let stats = compute_statistics(&history);
        let entries = &history[..history.len().min(HISTORY_PAYLOAD_CAP)];

        Ok(json!({
            "success": true,
            "history": entries,
            "projects": projects,
            "stats": stats,
            "total": history.len(),
        }))
    }

    fn global_statistics(&self) -> Result<Value> {
        let history = self.reload_history()?;
        let stats = compute_statistics(&history);
        Ok(ApiResponse::success(serde_json::to_value(stats)?).into_value())
    }

    fn search(&self, query: &str) -> Result<Value> {
        let history = self.reload_history()?;
        let needle = query.to_lowercase();
        let results: Vec<&HistoryEntry> = history
            .iter()
            .filter(|entry| entry.display.to_lowercase().contains(&needle))
            .take(SEARCH_RESULT_CAP)
            .collect();

        Ok(ApiResponse::success(json!({
            "query": query,
            "count": results.len(),
            "results": results,
        }))
        .into_value())
    }

    fn project_sessions(&self, project_path: &str) -> Result<Value> {
        let sessions = reconstruct_sessions(&self.config, project_path)?;
        let total: usize = sessions.iter().map(|s| s.message_count).sum();

        Ok(json!({
            "success": true,
            "sessions": sessions,
            "currentProject": project_path,
            "total": total,
            "sessionCount": sessions.len(),
        }))
    }
}
