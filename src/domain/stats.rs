use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventTypeStats {
    #[serde(default)]
    pub allowed_channels: Vec<String>,
    #[serde(default)]
    pub intended_channels: Vec<String>,
    #[serde(default)]
    pub retry_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEvent {
    pub event_type: String,
    pub channel: String,
    pub status: String,
}

impl SampleEvent {
    /// Normalizes one raw log entry. The event type may live under
    /// `event_type`, `type` or `event`; entries without an event type or
    /// channel are dropped.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let event_type = ["event_type", "type", "event"]
            .iter()
            .find_map(|key| raw.get(*key).and_then(scalar_to_string))?;
        let channel = raw.get("channel").and_then(scalar_to_string)?;
        let status = raw
            .get("status")
            .and_then(scalar_to_string)
            .unwrap_or_default();

        Some(Self {
            event_type,
            channel,
            status,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status.to_uppercase().starts_with("SUC")
    }
}

fn scalar_to_string(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Read-only statistics tables consulted by routing. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StatsCatalog {
    pub event_stats: HashMap<String, EventTypeStats>,
    pub sample_events: Vec<SampleEvent>,
}

impl StatsCatalog {
    pub fn new(event_stats: HashMap<String, EventTypeStats>, sample_events: Vec<SampleEvent>) -> Self {
        Self {
            event_stats,
            sample_events,
        }
    }

    pub fn event(&self, event_type: &str) -> Option<&EventTypeStats> {
        self.event_stats.get(event_type)
    }

    pub fn retry_percentage(&self, event_type: &str) -> f64 {
        self.event(event_type).map(|s| s.retry_percentage).unwrap_or(0.0)
    }

    pub fn intended_channels(&self, event_type: &str) -> &[String] {
        self.event(event_type)
            .map(|s| s.intended_channels.as_slice())
            .unwrap_or(&[])
    }

    /// Loads both tables, degrading to empty tables when a file is missing
    /// or unreadable.
    pub fn load(event_stats_path: &Path, sample_events_path: &Path) -> Self {
        let event_stats = match load_event_stats(event_stats_path) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("event stats unavailable path={} error={:#}", event_stats_path.display(), e);
                HashMap::new()
            }
        };
        let sample_events = match load_sample_events(sample_events_path) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("sample events unavailable path={} error={:#}", sample_events_path.display(), e);
                Vec::new()
            }
        };

        tracing::info!(
            "stats catalog loaded event_types={} sample_events={}",
            event_stats.len(),
            sample_events.len()
        );
        Self::new(event_stats, sample_events)
    }
}

pub fn load_event_stats(path: &Path) -> Result<HashMap<String, EventTypeStats>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_event_stats(&raw)
}

pub fn parse_event_stats(raw: &str) -> Result<HashMap<String, EventTypeStats>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_sample_events(path: &Path) -> Result<Vec<SampleEvent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_sample_events(&raw)
}

/// Accepts either a bare array or `{"events": [...]}`. Any other shape is an
/// empty log.
pub fn parse_sample_events(raw: &str) -> Result<Vec<SampleEvent>> {
    let doc: Value = serde_json::from_str(raw)?;
    let entries = match &doc {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("events") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    Ok(entries.iter().filter_map(SampleEvent::from_value).collect())
}
