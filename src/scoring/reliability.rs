use crate::domain::stats::SampleEvent;
use crate::scoring::types::{ChannelReliability, ChannelTally};
use std::collections::HashMap;

pub fn compute_channel_reliability(event_type: &str, events: &[SampleEvent]) -> ChannelReliability {
    let mut tallies: HashMap<&str, ChannelTally> = HashMap::new();
    for event in events.iter().filter(|e| e.event_type == event_type) {
        let tally = tallies.entry(event.channel.as_str()).or_default();
        tally.total += 1;
        if event.is_success() {
            tally.success += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(channel, tally)| (channel.to_string(), tally.ratio()))
        .collect()
}

/// Channels seen in the log for `event_type`, in first-seen order.
pub fn observed_channels(event_type: &str, events: &[SampleEvent]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for event in events.iter().filter(|e| e.event_type == event_type) {
        if !seen.iter().any(|c| c == &event.channel) {
            seen.push(event.channel.clone());
        }
    }
    seen
}
