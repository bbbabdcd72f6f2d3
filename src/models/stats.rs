use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{HistoryEntry, Usage};

/// Global statistics over the flat history log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_messages: usize,
    pub total_projects: usize,
    pub first_message: Option<HistoryEntry>,
    pub last_message: Option<HistoryEntry>,
    /// ISO local calendar date -> message count. A BTreeMap keeps the
    /// serialized histogram stably ordered.
    pub messages_by_day: BTreeMap<String, u64>,
}

/// Cumulative token counts, summed from assistant records' usage sub-objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTotals {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenTotals {
    pub fn add(&mut self, usage: &Usage) {
        self.input_tokens += usage.input_tokens;
        self.output_tokens += usage.output_tokens;
    }

    pub fn merge(&mut self, other: &TokenTotals) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Statistics scoped to one project (or to everything), extended with summed
/// token usage and an estimated cost in USD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub total_usage: TokenTotals,
    pub estimated_cost: f64,
}

/// Quota view for the settings layer: consumed share of the fixed monthly
/// token budget, clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub percentage: u8,
    pub total_tokens: u64,
    pub limit: u64,
    pub estimated_cost: f64,
}
