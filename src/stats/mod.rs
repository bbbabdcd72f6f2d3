//! Global statistics over the flat history log.
//!
//! Aggregates are derived structures built fresh per call; the log itself is
//! never mutated. An empty log yields zeroed statistics, not an error.

use std::collections::{HashMap, HashSet};

use chrono::{Local, TimeZone};

use crate::models::{HistoryEntry, ProjectInfo, Statistics};
use crate::utils::project_display_name;

/// Compute global statistics: totals, distinct project count, first/last
/// entry by timestamp, and a per-calendar-day message histogram in the local
/// time zone. Entries with the neutral timestamp 0 stay out of the histogram.
pub fn compute_statistics(history: &[HistoryEntry]) -> Statistics {
    let mut stats = Statistics { total_messages: history.len(), ..Statistics::default() };

    if history.is_empty() {
        return stats;
    }

    stats.first_message = history.iter().min_by_key(|e| e.timestamp).cloned();
    stats.last_message = history.iter().max_by_key(|e| e.timestamp).cloned();
    stats.total_projects =
        history.iter().filter_map(|e| e.project.as_deref()).collect::<HashSet<_>>().len();

    for entry in history {
        if entry.timestamp > 0
            && let Some(day) = local_day(entry.timestamp)
        {
            *stats.messages_by_day.entry(day).or_insert(0) += 1;
        }
    }

    stats
}

/// Group history entries into per-project aggregates (message count, last
/// access, owned messages), sorted by last access descending. Entries without
/// a project are not represented.
pub fn group_projects(history: &[HistoryEntry]) -> Vec<ProjectInfo> {
    let mut projects: HashMap<&str, ProjectInfo> = HashMap::new();

    for entry in history {
        let Some(path) = entry.project.as_deref() else {
            continue;
        };
        let project = projects.entry(path).or_insert_with(|| ProjectInfo {
            path: path.to_string(),
            name: project_display_name(Some(path)),
            count: 0,
            last_access: 0,
            messages: Vec::new(),
        });
        project.count += 1;
        project.messages.push(entry.clone());
        if entry.timestamp > project.last_access {
            project.last_access = entry.timestamp;
        }
    }

    let mut projects: Vec<ProjectInfo> = projects.into_values().collect();
    projects.sort_by(|a, b| b.last_access.cmp(&a.last_access));
    projects
}

fn local_day(timestamp_ms: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .earliest()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}
