use std::path::Path;

/// How a human-readable project path maps to a filesystem-safe directory name.
///
/// Two conventions coexist on disk and must stay distinct: transcript
/// directories substitute every non-alphanumeric character, while the legacy
/// conversation-detail directories substitute only path separators. Unifying
/// them would change which directory a query resolves to, so every caller
/// names its strategy explicitly ([`crate::config::EngineConfig`] owns the
/// mapping from data kind to strategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeStrategy {
    /// Every character outside `[A-Za-z0-9]` becomes `-`.
    Alphanumeric,
    /// Only path separators become `-`; all other characters pass through.
    Separators,
}

/// Map a project path to a filesystem-safe directory identifier.
///
/// # Examples
///
/// ```
/// use ai_transcript_engine::{SanitizeStrategy, sanitize_path};
///
/// assert_eq!(
///     sanitize_path("/Users/foo/my.project", SanitizeStrategy::Alphanumeric),
///     "-Users-foo-my-project"
/// );
/// assert_eq!(
///     sanitize_path("/Users/foo/my.project", SanitizeStrategy::Separators),
///     "-Users-foo-my.project"
/// );
/// ```
pub fn sanitize_path(path: &str, strategy: SanitizeStrategy) -> String {
    match strategy {
        SanitizeStrategy::Alphanumeric => path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect(),
        SanitizeStrategy::Separators => path
            .chars()
            .map(|c| if std::path::is_separator(c) { '-' } else { c })
            .collect(),
    }
}

/// Derive a display name for a project from the last component of its path.
/// Missing or empty components map to the reserved "Root" label.
pub fn project_display_name(path: Option<&str>) -> String {
    path.and_then(|p| Path::new(p).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Root".to_string())
}
