use chrono::Offset;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub event_stats_path: PathBuf,
    pub sample_events_path: PathBuf,
    pub inbox_path: PathBuf,
    pub trash_path: PathBuf,
    pub final_fallback_channel: String,
    pub default_event_type: String,
    pub inbox_tz_offset_minutes: i32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            event_stats_path: std::env::var("EVENT_STATS_PATH")
                .unwrap_or_else(|_| "data/event_type_stats.json".to_string())
                .into(),
            sample_events_path: std::env::var("SAMPLE_EVENTS_PATH")
                .unwrap_or_else(|_| "data/sampleEvents.json".to_string())
                .into(),
            inbox_path: std::env::var("INBOX_PATH")
                .unwrap_or_else(|_| "data/inbox.json".to_string())
                .into(),
            trash_path: std::env::var("TRASH_PATH")
                .unwrap_or_else(|_| "data/trash.json".to_string())
                .into(),
            final_fallback_channel: std::env::var("FINAL_FALLBACK_CHANNEL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Inbox".to_string()),
            default_event_type: std::env::var("DEFAULT_EVENT_TYPE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "OTP".to_string()),
            inbox_tz_offset_minutes: std::env::var("INBOX_TZ_OFFSET_MINUTES")
                .ok()
                .and_then(|s| s.parse::<i32>().ok())
                .unwrap_or(330),
        }
    }

    pub fn inbox_offset(&self) -> chrono::FixedOffset {
        offset_from_minutes(self.inbox_tz_offset_minutes)
    }
}

/// Out-of-range offsets fall back to UTC.
pub fn offset_from_minutes(minutes: i32) -> chrono::FixedOffset {
    minutes
        .checked_mul(60)
        .and_then(chrono::FixedOffset::east_opt)
        .unwrap_or_else(|| chrono::Utc.fix())
}
