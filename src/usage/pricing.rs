//! Per-model price table for cost estimation.
//!
//! Rates are USD per token. An unknown model never errors: lookup falls back
//! to sonnet-class rates and the default context limit.

use std::collections::HashMap;

use crate::models::TokenTotals;

/// Pricing and context limit for one model.
#[derive(Debug, Clone)]
pub struct ModelPricing {
    pub input_cost_per_token: f64,
    pub output_cost_per_token: f64,
    pub context_limit: u64,
}

/// Blended fallback rates for unknown models (sonnet-class).
pub const FALLBACK_INPUT_COST_PER_TOKEN: f64 = 3e-6;
pub const FALLBACK_OUTPUT_COST_PER_TOKEN: f64 = 15e-6;

/// Context limit assumed for models absent from the table.
pub const DEFAULT_CONTEXT_LIMIT: u64 = 200_000;

/// Hardcoded per-model rates for offline estimation.
pub fn default_pricing() -> HashMap<String, ModelPricing> {
    let mut m = HashMap::new();

    m.insert(
        "claude-sonnet-4-5".into(),
        ModelPricing {
            input_cost_per_token: 3e-6,
            output_cost_per_token: 15e-6,
            context_limit: 200_000,
        },
    );
    m.insert(
        "claude-opus-4-5-20251101".into(),
        ModelPricing {
            input_cost_per_token: 5e-6,
            output_cost_per_token: 25e-6,
            context_limit: 200_000,
        },
    );
    m.insert(
        "claude-haiku-4-5".into(),
        ModelPricing {
            input_cost_per_token: 1e-6,
            output_cost_per_token: 5e-6,
            context_limit: 200_000,
        },
    );
    m.insert(
        "claude-sonnet-4-20250514".into(),
        ModelPricing {
            input_cost_per_token: 3e-6,
            output_cost_per_token: 15e-6,
            context_limit: 200_000,
        },
    );
    m.insert(
        "claude-opus-4-1-20250805".into(),
        ModelPricing {
            input_cost_per_token: 15e-6,
            output_cost_per_token: 75e-6,
            context_limit: 200_000,
        },
    );
    m.insert(
        "claude-3-5-haiku-20241022".into(),
        ModelPricing {
            input_cost_per_token: 0.8e-6,
            output_cost_per_token: 4e-6,
            context_limit: 200_000,
        },
    );

    m
}

/// Look up pricing for a model id.
///
/// Fallback chain: exact match, then table key as prefix of the model id
/// (dated releases), then model id as prefix of a table key (family names).
pub fn lookup_pricing<'a>(
    model_id: &str,
    pricing: &'a HashMap<String, ModelPricing>,
) -> Option<&'a ModelPricing> {
    if model_id.is_empty() {
        return None;
    }
    if let Some(p) = pricing.get(model_id) {
        return Some(p);
    }
    for (key, p) in pricing {
        if model_id.starts_with(key.as_str()) {
            return Some(p);
        }
    }
    for (key, p) in pricing {
        if key.starts_with(model_id) {
            return Some(p);
        }
    }
    None
}

/// Price accumulated token totals for one model. Unknown models use the
/// fallback rates.
pub fn cost_for(
    model: Option<&str>,
    totals: &TokenTotals,
    pricing: &HashMap<String, ModelPricing>,
) -> f64 {
    match model.and_then(|m| lookup_pricing(m, pricing)) {
        Some(p) => {
            totals.input_tokens as f64 * p.input_cost_per_token
                + totals.output_tokens as f64 * p.output_cost_per_token
        }
        None => {
            totals.input_tokens as f64 * FALLBACK_INPUT_COST_PER_TOKEN
                + totals.output_tokens as f64 * FALLBACK_OUTPUT_COST_PER_TOKEN
        }
    }
}

/// Context limit for a model, defaulting when unknown.
pub fn context_limit_for(model: &str, pricing: &HashMap<String, ModelPricing>) -> u64 {
    lookup_pricing(model, pricing).map(|p| p.context_limit).unwrap_or(DEFAULT_CONTEXT_LIMIT)
}
