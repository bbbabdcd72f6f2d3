use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::{SanitizeStrategy, sanitize_path};

/// Filesystem roots the engine reads from, injected at construction so every
/// query can run against a synthetic directory tree in tests.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    claude_dir: PathBuf,
}

impl EngineConfig {
    pub fn new(claude_dir: impl Into<PathBuf>) -> Self {
        Self { claude_dir: claude_dir.into() }
    }

    /// Resolve the default data directory, `<home>/.claude`.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir()
            .or_else(|| env::var_os("HOME").map(PathBuf::from))
            .context("Could not determine the home directory")?;
        Ok(Self::new(home.join(".claude")))
    }

    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    /// The flat global history log.
    pub fn history_file(&self) -> PathBuf {
        self.claude_dir.join("history.jsonl")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.claude_dir.join("projects")
    }

    /// Transcript directory for a project. Transcript lookups use the
    /// alphanumeric sanitization convention.
    pub fn project_dir(&self, project_path: &str) -> PathBuf {
        self.projects_dir().join(sanitize_path(project_path, SanitizeStrategy::Alphanumeric))
    }

    /// Legacy conversation-detail directory for a project, which uses the
    /// separator-only sanitization convention.
    pub fn project_details_dir(&self, project_path: &str) -> PathBuf {
        self.projects_dir().join(sanitize_path(project_path, SanitizeStrategy::Separators))
    }
}
