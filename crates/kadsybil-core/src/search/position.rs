// crates/kadsybil-core/src/search/position.rs

use crate::cpl::CplDistribution;

/// Where the depth-first search stands. Copied on every recursive step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchPosition {
    /// CPL being decided; walks down to `lower`.
    pub cpl: usize,
    /// Nodes assigned at `cpl`.
    pub nodes_in_cpl: u32,
    /// Nodes assigned at `cpl` and above.
    pub total: u32,
    /// KL accumulated over every CPL decided so far.
    pub path_kl: f64,
    /// Lowest occupied CPL; the search ends here. Rises as real nodes are evicted.
    pub lower: usize,
    /// Sybils placed so far (including a forced closest Sybil).
    pub sybils: u32,
    /// CPL of the closest surviving real node, for proximity scoring.
    pub closest_real: Option<usize>,
}

/// Per-branch copy of the distribution under construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub nodes: CplDistribution,
    pub sybils: CplDistribution,
}

impl Candidate {
    pub fn from_baseline(baseline: CplDistribution) -> Self {
        Self {
            nodes: baseline,
            sybils: CplDistribution::default(),
        }
    }

    pub fn real_at(&self, cpl: usize) -> u32 {
        self.nodes[cpl] - self.sybils[cpl]
    }

    /// Real nodes in `from..to` that could be evicted.
    pub fn real_between(&self, from: usize, to: usize) -> u32 {
        (from..to).map(|cpl| self.real_at(cpl)).sum()
    }

    pub fn closest_real(&self) -> Option<usize> {
        (0..self.nodes.0.len()).rev().find(|&cpl| self.real_at(cpl) != 0)
    }

    /// Remove `count` real nodes from the farthest CPLs first, starting at
    /// `lower`. Returns the new lowest occupied CPL.
    pub fn evict_from_bottom(&mut self, lower: usize, count: u32) -> usize {
        let mut need = count;
        let mut cpl = lower;
        while need > 0 && cpl < self.nodes.0.len() {
            let take = self.real_at(cpl).min(need);
            self.nodes[cpl] -= take;
            need -= take;
            cpl += 1;
        }
        debug_assert_eq!(need, 0, "evicted more real nodes than available");

        (lower..self.nodes.0.len())
            .find(|&c| self.nodes[c] != 0)
            .unwrap_or(lower)
    }
}
