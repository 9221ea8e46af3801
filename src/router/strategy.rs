use crate::domain::routing_decision::{RoutingDecision, RoutingRequest};
use crate::domain::stats::StatsCatalog;
use crate::scoring::engine::{rank_by_reliability, round4};
use crate::scoring::reliability::{compute_channel_reliability, observed_channels};
use crate::scoring::types::reliability_of;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_CHANNELS: [&str; 5] = ["Inbox", "Email", "SMS", "InApp", "WhatsApp"];

#[derive(Clone)]
pub struct RoutingEngine {
    pub catalog: Arc<StatsCatalog>,
}

impl RoutingEngine {
    pub fn new(catalog: Arc<StatsCatalog>) -> Self {
        Self { catalog }
    }

    pub fn compute_routing_strategy(&self, req: &RoutingRequest<'_>) -> RoutingDecision {
        let events = &self.catalog.sample_events;
        let reliability = compute_channel_reliability(req.event_type, events);

        let mut allowed = self.resolve_allowed(req.event_type);

        if let Some(intended) = req.intended_channels {
            let narrowed: Vec<String> = intended
                .iter()
                .filter(|c| allowed.contains(c))
                .cloned()
                .collect();
            if !narrowed.is_empty() {
                allowed = narrowed;
            }
        }

        let primary = match req.intended_channel_override.filter(|o| !o.is_empty()) {
            Some(requested) if allowed.iter().any(|c| c == requested) => requested.to_string(),
            Some(requested) => {
                let corrected = rank_by_reliability(&reliability, &allowed)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| req.force_final_fallback.to_string());
                tracing::info!(
                    "override not allowed event_type={} requested={} corrected={}",
                    req.event_type,
                    requested,
                    corrected
                );
                corrected
            }
            None => allowed
                .first()
                .cloned()
                .unwrap_or_else(|| req.force_final_fallback.to_string()),
        };

        let candidates: Vec<String> = allowed.into_iter().filter(|c| c != &primary).collect();
        let mut fallbacks = rank_by_reliability(&reliability, &candidates);
        if !req.force_final_fallback.is_empty() {
            fallbacks.retain(|c| c != req.force_final_fallback);
            fallbacks.push(req.force_final_fallback.to_string());
        }

        let mut ranked_channels = Vec::with_capacity(fallbacks.len() + 1);
        ranked_channels.push(primary.clone());
        ranked_channels.extend(fallbacks.iter().cloned());

        let mut reliability_out = BTreeMap::new();
        let mut failure_rates = BTreeMap::new();
        for ch in &ranked_channels {
            let r = reliability_of(&reliability, ch);
            reliability_out.insert(ch.clone(), r);
            failure_rates.insert(ch.clone(), round4(1.0 - r));
        }

        RoutingDecision {
            primary,
            fallbacks,
            ranked_channels,
            reliability: reliability_out,
            failure_rates,
        }
    }

    /// Configured channels, else channels seen in history, else the fixed
    /// default set. Never empty.
    pub fn resolve_allowed(&self, event_type: &str) -> Vec<String> {
        let configured = self
            .catalog
            .event(event_type)
            .map(|s| s.allowed_channels.clone())
            .unwrap_or_default();
        if !configured.is_empty() {
            return configured;
        }

        let observed = observed_channels(event_type, &self.catalog.sample_events);
        if !observed.is_empty() {
            return observed;
        }

        DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect()
    }
}
