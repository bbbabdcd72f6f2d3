use std::sync::mpsc;

use serde_json::json;

use crate::config::EngineConfig;
use crate::models::ApiResponse;
use crate::usage::{UsageScope, aggregate_usage, usage_report};

/// Envelope delivered when a background usage aggregation finishes.
pub type UsageNotification = serde_json::Value;

/// Run usage aggregation off the caller's thread.
///
/// The scan is submitted to the process-wide rayon pool and the serialized
/// envelope is delivered over the returned channel once the scan completes or
/// fails, so the presentation surface never blocks on a large history. There
/// is no cancellation: a started scan runs to completion, and a receiver that
/// went away just discards the notification.
pub fn spawn_usage_statistics(
    config: EngineConfig,
    scope: UsageScope,
) -> mpsc::Receiver<UsageNotification> {
    let (tx, rx) = mpsc::channel();

    rayon::spawn(move || {
        let envelope = match aggregate_usage(&config, &scope) {
            Ok(statistics) => {
                let report = usage_report(&statistics);
                match serde_json::to_value(&statistics) {
                    Ok(stats_value) => ApiResponse::success(json!({
                        "statistics": stats_value,
                        "usage": report,
                    }))
                    .into_value(),
                    Err(e) => ApiResponse::error(format!("Failed to serialize statistics: {}", e))
                        .into_value(),
                }
            }
            Err(e) => {
                eprintln!("Warning: usage aggregation failed: {:#}", e);
                ApiResponse::error(format!("{:#}", e)).into_value()
            }
        };

        let _ = tx.send(envelope);
    });

    rx
}
