use crate::domain::notification::{AttemptRecord, AttemptStatus};
use crate::scoring::engine::clamp01;
use rand::Rng;

pub const INBOX: &str = "Inbox";

/// Stand-in for real channel providers: one weighted coin flip per attempt.
/// The guaranteed channel, and `inbox` in any casing, never fails.
#[derive(Debug, Clone)]
pub struct DeliverySimulator {
    pub guaranteed_channel: String,
}

impl Default for DeliverySimulator {
    fn default() -> Self {
        Self::new(INBOX)
    }
}

impl DeliverySimulator {
    pub fn new(guaranteed_channel: &str) -> Self {
        Self {
            guaranteed_channel: guaranteed_channel.to_string(),
        }
    }

    pub fn is_guaranteed(&self, channel: &str) -> bool {
        channel.eq_ignore_ascii_case(INBOX) || channel.eq_ignore_ascii_case(&self.guaranteed_channel)
    }

    pub fn simulate_send<R: Rng + ?Sized>(&self, rng: &mut R, channel: &str, fail_prob: f64) -> AttemptRecord {
        if self.is_guaranteed(channel) {
            return AttemptRecord {
                channel: channel.to_string(),
                status: AttemptStatus::Success,
                reason: "inbox_forced_delivery".to_string(),
                fail_prob: Some(0.0),
            };
        }

        let fp = if fail_prob.is_nan() { 0.5 } else { clamp01(fail_prob) };
        let draw: f64 = rng.gen();
        if draw < fp {
            AttemptRecord {
                channel: channel.to_string(),
                status: AttemptStatus::Failed,
                reason: format!("simulated_failure (fail_prob={:.2})", fp),
                fail_prob: Some(fp),
            }
        } else {
            AttemptRecord {
                channel: channel.to_string(),
                status: AttemptStatus::Success,
                reason: "delivered".to_string(),
                fail_prob: Some(fp),
            }
        }
    }
}
