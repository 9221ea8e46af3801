use anyhow::{Context, Result};
use notification_router::domain::stats::load_sample_events;
use notification_router::metrics::channel_stats::{aggregate, DEFAULT_SELECTED_EVENTS};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::var("STATS_INPUT").unwrap_or_else(|_| "data/sampleEvents.json".to_string());
    let output = std::env::var("STATS_OUTPUT")
        .unwrap_or_else(|_| "data/channel_failure_stats.json".to_string());
    let selected: HashSet<String> = match std::env::var("STATS_EVENT_TYPES") {
        Ok(list) if !list.trim().is_empty() => list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => DEFAULT_SELECTED_EVENTS.iter().map(|s| s.to_string()).collect(),
    };

    let events = load_sample_events(std::path::Path::new(&input))?;
    let report = aggregate(&events, &selected);

    let body = serde_json::to_vec_pretty(&report)?;
    std::fs::write(&output, body).with_context(|| format!("writing {}", output))?;
    tracing::info!(
        "channel stats written input={} output={} events={} event_types={}",
        input,
        output,
        events.len(),
        report.len()
    );
    Ok(())
}
