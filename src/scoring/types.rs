use std::collections::HashMap;

/// Reliability assumed for a channel with no history.
pub const NEUTRAL_RELIABILITY: f64 = 0.5;

pub type ChannelReliability = HashMap<String, f64>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelTally {
    pub success: u64,
    pub total: u64,
}

impl ChannelTally {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            NEUTRAL_RELIABILITY
        } else {
            self.success as f64 / self.total as f64
        }
    }
}

pub fn reliability_of(reliability: &ChannelReliability, channel: &str) -> f64 {
    reliability.get(channel).copied().unwrap_or(NEUTRAL_RELIABILITY)
}
