// crates/kadsybil-core/src/search/score.rs

use crate::config::ScorePriority;
use crate::cpl::CplDistribution;

pub fn score(priority: ScorePriority, sybils: &CplDistribution, closest_real: Option<usize>) -> f64 {
    match priority {
        ScorePriority::Quantity => sybils.total() as f64,
        ScorePriority::Distribution => cpl_weighted(sybils, 0),
        ScorePriority::Proximity => cpl_weighted(sybils, closest_real.unwrap_or(0)),
    }
}

/// sum(cpl * sybils[cpl]) over cpl >= from
fn cpl_weighted(sybils: &CplDistribution, from: usize) -> f64 {
    sybils
        .iter()
        .skip(from)
        .map(|(cpl, n)| (cpl as u64 * n as u64) as f64)
        .sum()
}
