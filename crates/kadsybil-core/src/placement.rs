// crates/kadsybil-core/src/placement.rs

use serde::{Deserialize, Serialize};

use crate::cpl::{CplDistribution, MAX_CPL};

/// One accepted candidate: where the K closest slots end up and how many of
/// them are Sybils.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// All identities (real + Sybil) per CPL; sums to K.
    pub nodes_per_cpl: CplDistribution,
    /// Sybils inserted per CPL.
    pub sybils_per_cpl: CplDistribution,
    pub kl: f64,
    pub score: f64,
}

impl Placement {
    pub fn total_sybils(&self) -> u32 {
        self.sybils_per_cpl.total()
    }

    /// Real nodes that survive in the K closest slots.
    pub fn real_per_cpl(&self) -> CplDistribution {
        let mut out = [0u32; MAX_CPL];
        for (cpl, slot) in out.iter_mut().enumerate() {
            *slot = self.nodes_per_cpl[cpl].saturating_sub(self.sybils_per_cpl[cpl]);
        }
        CplDistribution(out)
    }

    /// The single closest slot is taken by a Sybil: some Sybil sits at the
    /// highest occupied CPL (a Sybil can always be generated closer than the
    /// real peers sharing its bucket).
    pub fn closest_is_sybil(&self) -> bool {
        match (
            self.sybils_per_cpl.highest_occupied(),
            self.nodes_per_cpl.highest_occupied(),
        ) {
            (Some(s), Some(n)) => s >= n,
            _ => false,
        }
    }

    /// Sybils at or above the CPL of the closest surviving real node.
    pub fn closer_than_all_reliable(&self) -> u32 {
        let from = self.real_per_cpl().highest_occupied().unwrap_or(0);
        self.sybils_per_cpl.0[from..].iter().sum()
    }
}
