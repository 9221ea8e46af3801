use crate::scoring::types::{reliability_of, ChannelReliability};
use std::cmp::Ordering;

pub fn clamp01(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Most reliable first; equal reliability falls back to channel name.
/// Duplicates are kept.
pub fn rank_by_reliability(reliability: &ChannelReliability, channels: &[String]) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = channels
        .iter()
        .map(|ch| (ch, reliability_of(reliability, ch)))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked.into_iter().map(|(ch, _)| ch.clone()).collect()
}
