use notification_router::domain::stats::{load_event_stats, load_sample_events};
use std::path::Path;

#[test]
fn config_defaults_are_stable() {
    let cfg = notification_router::config::AppConfig::from_env();
    assert!(!cfg.final_fallback_channel.is_empty());
    assert!(!cfg.default_event_type.is_empty());
}

#[test]
fn bundled_data_files_parse() {
    let stats = load_event_stats(Path::new("data/event_type_stats.json")).unwrap();
    assert!(stats.contains_key("OTP"));
    let events = load_sample_events(Path::new("data/sampleEvents.json")).unwrap();
    assert!(!events.is_empty());
}

#[test]
fn endpoints_are_documented_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/send"));
    assert!(readme.contains("/clear_inbox"));
    assert!(readme.contains("/routing/:event_type"));
}
