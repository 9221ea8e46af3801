#![allow(dead_code)]

use notification_router::channels::simulator::DeliverySimulator;
use notification_router::domain::stats::{EventTypeStats, SampleEvent, StatsCatalog};
use notification_router::repo::inbox_repo::InboxRepo;
use notification_router::router::strategy::RoutingEngine;
use notification_router::service::notification_service::NotificationService;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn ev(event_type: &str, channel: &str, status: &str) -> SampleEvent {
    SampleEvent {
        event_type: event_type.to_string(),
        channel: channel.to_string(),
        status: status.to_string(),
    }
}

/// OTP: configured SMS-first; Fraud Alert: nothing configured, history only.
pub fn catalog() -> StatsCatalog {
    let mut stats = HashMap::new();
    stats.insert(
        "OTP".to_string(),
        EventTypeStats {
            allowed_channels: names(&["SMS", "WhatsApp", "Email", "Inbox"]),
            intended_channels: vec![],
            retry_percentage: 55.0,
        },
    );
    stats.insert(
        "Fraud Alert".to_string(),
        EventTypeStats {
            allowed_channels: vec![],
            intended_channels: vec![],
            retry_percentage: 45.0,
        },
    );
    stats.insert(
        "Monthly Statement".to_string(),
        EventTypeStats {
            allowed_channels: names(&["Email", "InApp", "Inbox"]),
            intended_channels: names(&["InApp", "Email"]),
            retry_percentage: 12.0,
        },
    );

    let events = vec![
        ev("OTP", "SMS", "SUCCESS"),
        ev("OTP", "SMS", "FAILED"),
        ev("OTP", "WhatsApp", "SUCCESS"),
        ev("OTP", "WhatsApp", "SUCCESS"),
        ev("OTP", "WhatsApp", "FAILED"),
        ev("OTP", "WhatsApp", "SUCCESS"),
        ev("OTP", "Email", "FAILED"),
        ev("Fraud Alert", "SMS", "SUCCESS"),
        ev("Fraud Alert", "Email", "FAILED"),
        ev("Fraud Alert", "SMS", "SUCCESS"),
    ];
    StatsCatalog::new(stats, events)
}

pub fn engine() -> RoutingEngine {
    RoutingEngine::new(Arc::new(catalog()))
}

pub fn service(dir: &Path) -> NotificationService {
    NotificationService {
        engine: engine(),
        simulator: DeliverySimulator::default(),
        inbox_repo: InboxRepo::new(dir.join("inbox.json"), dir.join("trash.json")),
        final_fallback: "Inbox".to_string(),
        default_event_type: "OTP".to_string(),
        inbox_offset: chrono::FixedOffset::east_opt(330 * 60).unwrap(),
    }
}
