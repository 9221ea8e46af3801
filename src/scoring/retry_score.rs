use crate::domain::stats::StatsCatalog;

pub fn retry_score_from_percentage(retry_percentage: f64) -> u8 {
    if retry_percentage > 50.0 {
        2
    } else if retry_percentage > 40.0 {
        1
    } else {
        0
    }
}

pub fn compute_retry_score(catalog: &StatsCatalog, event_type: &str) -> u8 {
    retry_score_from_percentage(catalog.retry_percentage(event_type))
}

pub fn retry_score_to_fail_prob(score: u8) -> f64 {
    match score {
        0 => 0.05,
        1 => 0.15,
        2 => 0.30,
        3 => 0.55,
        4 => 0.75,
        5 => 0.90,
        _ => 0.95,
    }
}
