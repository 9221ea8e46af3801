use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub primary: String,
    pub fallbacks: Vec<String>,
    pub ranked_channels: Vec<String>,
    pub reliability: BTreeMap<String, f64>,
    pub failure_rates: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default)]
pub struct RoutingRequest<'a> {
    pub event_type: &'a str,
    pub intended_channels: Option<&'a [String]>,
    pub intended_channel_override: Option<&'a str>,
    pub force_final_fallback: &'a str,
}
