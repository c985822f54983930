// crates/kadsybil-core/src/search/closest.rs
//
// Closest-node-is-Sybil pre-pass.
//
// One unit moves from the lowest occupied CPL to either the highest occupied
// CPL h (a Sybil generated closer than every real peer in that bucket) or
// h+1, whichever raises the total KL less. Ties go to h+1.

use crate::cpl::MAX_CPL;
use crate::error::{Result, SybilError};
use crate::kl::KlCostTable;
use crate::search::position::Candidate;

pub fn force_closest_sybil(cand: &mut Candidate, table: &KlCostTable) -> Result<usize> {
    let (lowest, highest) = match cand.nodes.occupied_range() {
        Some(r) => (*r.start(), *r.end()),
        None => {
            return Err(SybilError::Configuration(
                "empty baseline has no closest slot".into(),
            ))
        }
    };

    let before = table.path_cost(&cand.nodes);
    let added_cost = |target: usize| {
        let mut trial = cand.nodes;
        trial[lowest] -= 1;
        trial[target] += 1;
        table.path_cost(&trial) - before
    };

    let mut target = highest;
    if highest + 1 < MAX_CPL && added_cost(highest + 1) <= added_cost(highest) {
        target = highest + 1;
    }

    cand.nodes[lowest] -= 1;
    cand.nodes[target] += 1;
    cand.sybils[target] += 1;

    tracing::debug!(from = lowest, to = target, "forced closest sybil");
    Ok(target)
}
