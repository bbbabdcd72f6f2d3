//! Token-usage and cost aggregation across transcript histories.
//!
//! Usage is derived solely from the `usage` sub-objects of assistant records;
//! records without usage contribute zero. Counts are accumulated per model so
//! the price table applies the right rate to each slice, then summed into one
//! estimate. Everything is recomputed from disk per request.

pub mod pricing;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::models::{ProjectStatistics, TokenTotals, UsageReport};
use crate::parsers::{parse_history_file, parse_transcript_file};
use crate::sessions::list_transcript_files;
use crate::stats::compute_statistics;
use crate::usage::pricing::{cost_for, default_pricing};

pub use pricing::{ModelPricing, context_limit_for, default_pricing as pricing_table};

/// Fixed monthly token budget backing the quota percentage.
pub const MONTHLY_TOKEN_LIMIT: u64 = 5_000_000;

const RECORD_TYPE_ASSISTANT: &str = "assistant";

/// What slice of the history an aggregation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageScope {
    /// Every project directory.
    All,
    /// A single project, by its human-readable path.
    Project(String),
}

/// Aggregate usage statistics for a scope.
///
/// The statistics half (message counts, per-day histogram) comes from the
/// flat history log filtered to the scope; the usage half is summed over the
/// scope's transcript files, per model, and priced.
pub fn aggregate_usage(config: &EngineConfig, scope: &UsageScope) -> Result<ProjectStatistics> {
    let history = parse_history_file(&config.history_file())?;
    let scoped: Vec<_> = match scope {
        UsageScope::All => history,
        UsageScope::Project(path) => {
            history.into_iter().filter(|e| e.project.as_deref() == Some(path.as_str())).collect()
        }
    };
    let statistics = compute_statistics(&scoped);

    let per_model = collect_model_totals(config, scope);
    let pricing = default_pricing();

    let mut total_usage = TokenTotals::default();
    let mut estimated_cost = 0.0;
    for (model, totals) in &per_model {
        total_usage.merge(totals);
        estimated_cost += cost_for(model.as_deref(), totals, &pricing);
    }

    Ok(ProjectStatistics { statistics, total_usage, estimated_cost })
}

/// Build the quota view from aggregated statistics: consumed share of the
/// monthly token budget, clamped to [0, 100].
pub fn usage_report(statistics: &ProjectStatistics) -> UsageReport {
    let total_tokens = statistics.total_usage.total();
    let percentage =
        ((total_tokens as f64 * 100.0) / MONTHLY_TOKEN_LIMIT as f64).min(100.0) as u8;
    UsageReport {
        percentage,
        total_tokens,
        limit: MONTHLY_TOKEN_LIMIT,
        estimated_cost: statistics.estimated_cost,
    }
}

/// Sum token usage per model over every transcript file in scope. Files are
/// processed in parallel; unreadable files are logged and contribute nothing.
fn collect_model_totals(
    config: &EngineConfig,
    scope: &UsageScope,
) -> HashMap<Option<String>, TokenTotals> {
    transcript_files_for_scope(config, scope)
        .par_iter()
        .map(|path| {
            let records = match parse_transcript_file(path) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Warning: skipping transcript {}: {}", path.display(), e);
                    return HashMap::new();
                }
            };

            let mut totals: HashMap<Option<String>, TokenTotals> = HashMap::new();
            for record in &records {
                if record.record_type.as_deref() != Some(RECORD_TYPE_ASSISTANT) {
                    continue;
                }
                let Some(message) = record.message.as_ref() else {
                    continue;
                };
                let Some(usage) = message.usage.as_ref() else {
                    continue;
                };
                totals.entry(message.model.clone()).or_default().add(usage);
            }
            totals
        })
        .reduce(HashMap::new, |mut acc, part| {
            for (model, totals) in part {
                acc.entry(model).or_default().merge(&totals);
            }
            acc
        })
}

fn transcript_files_for_scope(config: &EngineConfig, scope: &UsageScope) -> Vec<PathBuf> {
    match scope {
        UsageScope::Project(path) if path.is_empty() => Vec::new(),
        UsageScope::Project(path) => list_transcript_files(&config.project_dir(path)),
        UsageScope::All => {
            let Ok(entries) = fs::read_dir(config.projects_dir()) else {
                return Vec::new();
            };
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .flat_map(|entry| list_transcript_files(&entry.path()))
                .collect()
        }
    }
}
