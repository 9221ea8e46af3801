use crate::channels::simulator::{DeliverySimulator, INBOX};
use crate::domain::notification::{AttemptRecord, AttemptStatus};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    AttemptPrimary,
    AttemptFallback(usize),
    ForceInbox,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryDirective {
    Delivered,
    Continue,
}

#[derive(Debug, Clone)]
pub struct DeliveryPlan<'a> {
    pub primary: &'a str,
    pub fallbacks: &'a [String],
    pub final_fallback: &'a str,
    pub fail_prob: f64,
    pub force_primary_failure: bool,
}

#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub delivered_via: String,
    pub attempts: Vec<AttemptRecord>,
}

pub fn classify_attempt(record: &AttemptRecord) -> DeliveryDirective {
    match record.status {
        AttemptStatus::Success => DeliveryDirective::Delivered,
        AttemptStatus::Failed => DeliveryDirective::Continue,
    }
}

fn skipped_as_fallback(channel: &str, final_fallback: &str) -> bool {
    channel.eq_ignore_ascii_case(INBOX) || channel.eq_ignore_ascii_case(final_fallback)
}

/// Primary, then each ranked fallback, then the final fallback which is
/// synthesized as delivered. Always terminates with a delivery.
pub fn run_delivery<R: Rng + ?Sized>(
    plan: &DeliveryPlan<'_>,
    simulator: &DeliverySimulator,
    rng: &mut R,
) -> DeliveryOutcome {
    let mut attempts = Vec::new();
    let mut delivered_via = String::new();
    let mut state = DeliveryState::AttemptPrimary;

    loop {
        state = match state {
            DeliveryState::AttemptPrimary => {
                let record = if plan.force_primary_failure {
                    AttemptRecord {
                        channel: plan.primary.to_string(),
                        status: AttemptStatus::Failed,
                        reason: "forced_primary_failure_demo_mode".to_string(),
                        fail_prob: None,
                    }
                } else {
                    simulator.simulate_send(rng, plan.primary, plan.fail_prob)
                };
                tracing::debug!(
                    "primary attempt channel={} status={:?} reason={}",
                    record.channel,
                    record.status,
                    record.reason
                );
                let directive = classify_attempt(&record);
                attempts.push(record);
                match directive {
                    DeliveryDirective::Delivered => {
                        delivered_via = plan.primary.to_string();
                        DeliveryState::Done
                    }
                    DeliveryDirective::Continue => DeliveryState::AttemptFallback(0),
                }
            }
            DeliveryState::AttemptFallback(idx) => match plan.fallbacks.get(idx) {
                None => DeliveryState::ForceInbox,
                Some(ch) if skipped_as_fallback(ch, plan.final_fallback) => {
                    DeliveryState::AttemptFallback(idx + 1)
                }
                Some(ch) => {
                    let record = simulator.simulate_send(rng, ch, plan.fail_prob);
                    tracing::debug!(
                        "fallback attempt channel={} status={:?} reason={}",
                        record.channel,
                        record.status,
                        record.reason
                    );
                    let directive = classify_attempt(&record);
                    attempts.push(record);
                    match directive {
                        DeliveryDirective::Delivered => {
                            delivered_via = ch.clone();
                            DeliveryState::Done
                        }
                        DeliveryDirective::Continue => DeliveryState::AttemptFallback(idx + 1),
                    }
                }
            },
            DeliveryState::ForceInbox => {
                attempts.push(AttemptRecord {
                    channel: plan.final_fallback.to_string(),
                    status: AttemptStatus::Success,
                    reason: "forced_final_fallback".to_string(),
                    fail_prob: None,
                });
                delivered_via = plan.final_fallback.to_string();
                DeliveryState::Done
            }
            DeliveryState::Done => break,
        };
    }

    DeliveryOutcome {
        delivered_via,
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn primary_success_stops_immediately() {
        let fallbacks = names(&["Email", "Inbox"]);
        let plan = DeliveryPlan {
            primary: "SMS",
            fallbacks: &fallbacks,
            final_fallback: "Inbox",
            fail_prob: 0.3,
            force_primary_failure: false,
        };
        let out = run_delivery(&plan, &DeliverySimulator::default(), &mut StepRng::new(u64::MAX, 0));
        assert_eq!(out.delivered_via, "SMS");
        assert_eq!(out.attempts.len(), 1);
    }

    #[test]
    fn all_failures_end_in_forced_inbox() {
        let fallbacks = names(&["Email", "inbox", "WhatsApp", "Inbox"]);
        let plan = DeliveryPlan {
            primary: "SMS",
            fallbacks: &fallbacks,
            final_fallback: "Inbox",
            fail_prob: 0.3,
            force_primary_failure: false,
        };
        let out = run_delivery(&plan, &DeliverySimulator::default(), &mut StepRng::new(0, 0));
        let channels: Vec<&str> = out.attempts.iter().map(|a| a.channel.as_str()).collect();
        assert_eq!(channels, vec!["SMS", "Email", "WhatsApp", "Inbox"]);
        assert_eq!(out.delivered_via, "Inbox");
        assert_eq!(out.attempts[3].reason, "forced_final_fallback");
    }

    #[test]
    fn forced_primary_failure_moves_to_first_fallback() {
        let fallbacks = names(&["Email", "Inbox"]);
        let plan = DeliveryPlan {
            primary: "SMS",
            fallbacks: &fallbacks,
            final_fallback: "Inbox",
            fail_prob: 0.0,
            force_primary_failure: true,
        };
        let out = run_delivery(&plan, &DeliverySimulator::default(), &mut StepRng::new(0, 0));
        assert_eq!(out.attempts[0].reason, "forced_primary_failure_demo_mode");
        assert_eq!(out.attempts[1].channel, "Email");
        assert_eq!(out.delivered_via, "Email");
        assert_eq!(out.attempts.len(), 2);
    }
}
