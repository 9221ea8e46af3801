use crate::domain::stats::SampleEvent;
use crate::scoring::engine::round4;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

pub const DEFAULT_SELECTED_EVENTS: [&str; 4] = ["OTP", "Fraud Alert", "Monthly Statement", "Payment Confirmation"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelFailureStats {
    pub total_attempts: u64,
    pub failures: u64,
    pub success: u64,
    pub failure_rate: f64,
}

pub type ChannelStatsReport = BTreeMap<String, BTreeMap<String, ChannelFailureStats>>;

pub fn normalize_event_type(raw: &str) -> String {
    match raw.trim() {
        "Transaction OTP" => "OTP".to_string(),
        other => other.to_string(),
    }
}

pub fn normalize_channel(raw: &str) -> String {
    let trimmed = raw.trim();
    let canonical = match trimmed.to_lowercase().as_str() {
        "push notification" | "app notification" | "mobile push" | "push" => "Push",
        "email notification" | "e-mail" | "mail" | "email" => "Email",
        "whatsapp" | "whats app" => "WhatsApp",
        "sms" => "SMS",
        _ => return trimmed.to_string(),
    };
    canonical.to_string()
}

pub fn aggregate(events: &[SampleEvent], selected: &HashSet<String>) -> ChannelStatsReport {
    let mut report = ChannelStatsReport::new();
    for event in events {
        let event_type = normalize_event_type(&event.event_type);
        if !selected.contains(&event_type) {
            continue;
        }
        let stats = report
            .entry(event_type)
            .or_default()
            .entry(normalize_channel(&event.channel))
            .or_default();
        stats.total_attempts += 1;
        if event.is_success() {
            stats.success += 1;
        } else {
            stats.failures += 1;
        }
    }

    for stats in report.values_mut().flat_map(|channels| channels.values_mut()) {
        stats.failure_rate = if stats.total_attempts == 0 {
            0.0
        } else {
            round4(stats.failures as f64 / stats.total_attempts as f64)
        };
    }
    report
}
